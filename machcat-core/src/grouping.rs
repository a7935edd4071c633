use crate::models::{CatalogItem, Dimension};
use crate::sorting::compare_labels;
use std::collections::HashMap;

/// Group name for items without a term in the grouping dimension
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

/// Group items by the resolved labels of a dimension
/// Items with several terms (sectors, categories) appear in several groups
/// Returns a HashMap where keys are group labels and values are the items in input order
pub fn group_items_by_dimension(
    items: &[CatalogItem],
    dimension: Dimension,
    locale: &str,
) -> HashMap<String, Vec<CatalogItem>> {
    let mut groups: HashMap<String, Vec<CatalogItem>> = HashMap::new();

    for item in items {
        let mut labels: Vec<String> = Vec::new();
        for term in item.terms(dimension) {
            let label = term.resolved_label(locale);
            let label = if label.is_empty() { term.id.clone() } else { label };
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        if labels.is_empty() {
            groups
                .entry(UNSPECIFIED_GROUP.to_string())
                .or_default()
                .push(item.clone());
        } else {
            for label in labels {
                groups.entry(label).or_default().push(item.clone());
            }
        }
    }

    groups
}

/// Get group names in label order, with the unspecified group last
pub fn sorted_group_names(groups: &HashMap<String, Vec<CatalogItem>>) -> Vec<String> {
    let mut group_names: Vec<String> = groups.keys().cloned().collect();
    group_names.sort_by(|a, b| {
        (a == UNSPECIFIED_GROUP)
            .cmp(&(b == UNSPECIFIED_GROUP))
            .then_with(|| compare_labels(a, b))
    });
    group_names
}
