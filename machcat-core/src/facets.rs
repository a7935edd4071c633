use crate::locale::resolve_text;
use crate::models::{CatalogItem, Dimension, FacetLists, FacetOption};
use crate::sorting::collation_key;
use std::collections::HashMap;
use tracing::debug;

/// Options of one dimension in first-seen order, deduplicated by id
#[derive(Default)]
struct OptionCollector {
    options: Vec<FacetOption>,
    positions: HashMap<String, usize>,
}

impl OptionCollector {
    fn insert(&mut self, id: &str, label: String) {
        match self.positions.get(id) {
            // Last label seen for an id wins; its position does not move
            Some(&position) => self.options[position].label = label,
            None => {
                self.positions.insert(id.to_string(), self.options.len());
                self.options.push(FacetOption {
                    id: id.to_string(),
                    label,
                });
            }
        }
    }

    fn into_sorted(mut self) -> Vec<FacetOption> {
        self.options.sort_by_cached_key(|option| collation_key(&option.label));
        self.options
    }
}

/// Derive the filter options offered for each dimension
///
/// Only browsable items (with a slug) contribute, so no option leads to an
/// empty result. Options are sorted by resolved label; equal labels keep the
/// order in which their ids were first seen.
pub fn extract_facets(items: &[CatalogItem], locale: &str) -> FacetLists {
    let mut collectors: [OptionCollector; 4] = Default::default();
    let mut skipped = 0usize;

    for item in items {
        if !item.is_browsable() {
            skipped += 1;
            continue;
        }

        for dimension in Dimension::ALL {
            let collector = &mut collectors[dimension.index()];
            for term in item.terms(dimension) {
                collector.insert(&term.id, resolve_text(term.label.as_ref(), locale));
            }
        }
    }

    let mut facets = FacetLists::default();
    for (dimension, collector) in Dimension::ALL.into_iter().zip(collectors) {
        *facets.get_mut(dimension) = collector.into_sorted();
    }

    debug!(
        locale,
        items = items.len(),
        skipped,
        product_types = facets.product_type.len(),
        sectors = facets.sector.len(),
        categories = facets.category.len(),
        brands = facets.brand.len(),
        "Extracted facets"
    );

    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{item, plain_term, term};

    fn labels(options: &[FacetOption]) -> Vec<&str> {
        options.iter().map(|option| option.label.as_str()).collect()
    }

    #[test]
    fn test_shared_term_produces_one_option() {
        let mut first = item("1", Some("one"));
        first.sector = vec![term("s1", "Обувь", "Ayakkabı")];
        let mut second = item("2", Some("two"));
        second.sector = vec![term("s1", "Обувь", "Ayakkabı")];

        let facets = extract_facets(&[first, second], "ru");

        assert_eq!(
            facets.sector,
            vec![FacetOption {
                id: "s1".to_string(),
                label: "Обувь".to_string()
            }]
        );
    }

    #[test]
    fn test_items_without_slug_are_ignored() {
        let mut listed = item("1", Some("x"));
        listed.sector = vec![plain_term("s1", "Shoes")];
        listed.brand = Some(plain_term("b1", "Pfaff"));
        let mut hidden = item("2", None);
        hidden.sector = vec![plain_term("s2", "Bags")];
        hidden.product_type = Some(plain_term("t1", "Machine"));

        let facets = extract_facets(&[listed, hidden], "ru");

        assert_eq!(labels(&facets.sector), vec!["Shoes"]);
        assert_eq!(labels(&facets.brand), vec!["Pfaff"]);
        assert!(facets.product_type.is_empty());
        assert!(facets.category.is_empty());
    }

    #[test]
    fn test_options_sorted_by_resolved_label() {
        let mut first = item("1", Some("one"));
        first.category = vec![
            term("c1", "Швейные", "Zincir dikiş"),
            term("c2", "Оверлоки", "Overlok"),
        ];
        let mut second = item("2", Some("two"));
        second.category = vec![term("c3", "Автоматы", "Çanta otomatı")];

        let facets = extract_facets(&[first.clone(), second.clone()], "tr");
        assert_eq!(
            labels(&facets.category),
            vec!["Çanta otomatı", "Overlok", "Zincir dikiş"]
        );

        let facets = extract_facets(&[first, second], "ru");
        assert_eq!(labels(&facets.category), vec!["Автоматы", "Оверлоки", "Швейные"]);
    }

    #[test]
    fn test_equal_labels_keep_first_seen_order() {
        let mut first = item("1", Some("one"));
        first.brand = Some(plain_term("b2", "Juki"));
        let mut second = item("2", Some("two"));
        second.brand = Some(plain_term("b1", "Juki"));

        let facets = extract_facets(&[first, second], "ru");
        let ids: Vec<&str> = facets.brand.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b1"]);
    }

    #[test]
    fn test_last_label_wins_for_repeated_id() {
        let mut first = item("1", Some("one"));
        first.brand = Some(plain_term("b1", "Durkopp"));
        let mut second = item("2", Some("two"));
        second.brand = Some(plain_term("b1", "Durkopp Adler"));

        let facets = extract_facets(&[first, second], "ru");
        assert_eq!(labels(&facets.brand), vec!["Durkopp Adler"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_lists() {
        let facets = extract_facets(&[], "ru");
        assert!(facets.is_empty());

        let bare = extract_facets(&[item("1", Some("one"))], "ru");
        assert!(bare.is_empty());
    }
}
