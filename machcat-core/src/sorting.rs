use crate::models::CatalogItem;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Brands listed first in results, matched as substrings of the lower-cased brand label
pub const BRAND_PRIORITY: [&str; 3] = ["durkopp adler", "pfaff", "ksl"];

/// Normalize a label for locale-aware ordering
/// - Decompose unicode (NFD) and drop combining marks, so "ş" sorts with "s"
/// - Lowercase, with Turkish dotless "ı" folded to "i"
/// - Collapse internal whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let base: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .replace('ı', "i");

    base.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sort key for labels: accent-insensitive first, accents break ties
pub fn collation_key(s: &str) -> (String, String) {
    let accented = s.nfd().collect::<String>().to_lowercase();
    (normalize_for_sorting(s), accented)
}

/// Compare two labels the way the facet lists are ordered
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Position of the first priority entry contained in the item's brand label
pub fn brand_rank(item: &CatalogItem, priorities: &[&str], locale: &str) -> Option<usize> {
    let brand = item.brand_label(locale).to_lowercase();
    priorities.iter().position(|entry| brand.contains(entry))
}

/// Move priority brands to the front
///
/// Stable: items with the same rank, including items matching no entry,
/// keep their relative order.
pub fn prioritize_brands(items: &mut [CatalogItem], priorities: &[&str], locale: &str) {
    items.sort_by_cached_key(|item| brand_rank(item, priorities, locale).unwrap_or(usize::MAX));
}
