use crate::models::CatalogItem;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Validate a catalog snapshot
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_catalog(items: &[CatalogItem]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut slugs: HashMap<&str, &str> = HashMap::new();

    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("Item #{} ('{}')", idx + 1, item.model_code);

        if item.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", item_ref));
        } else if !ids.insert(item.id.as_str()) {
            errors.push(format!("{}: duplicate item id '{}'", item_ref, item.id));
        }

        // Slugs address items externally and must be unique
        if let Some(slug) = item.slug.as_deref().filter(|slug| !slug.is_empty()) {
            match slugs.entry(slug) {
                Entry::Occupied(first) => errors.push(format!(
                    "{}: slug '{}' is already used by item '{}'",
                    item_ref,
                    slug,
                    first.get()
                )),
                Entry::Vacant(entry) => {
                    entry.insert(item.id.as_str());
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Items hidden from browsing because they have no slug
pub fn missing_slugs(items: &[CatalogItem]) -> Vec<&CatalogItem> {
    items.iter().filter(|item| !item.is_browsable()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;

    #[test]
    fn test_valid_catalog_passes() {
        let items = vec![item("1", Some("one")), item("2", Some("two")), item("3", None)];
        assert!(validate_catalog(&items).is_ok());
    }

    #[test]
    fn test_duplicate_ids_and_slugs_fail() {
        let items = vec![
            item("1", Some("one")),
            item("1", Some("uno")),
            item("2", Some("one")),
        ];

        let errors = validate_catalog(&items).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("duplicate item id '1'"));
        assert!(errors[1].contains("slug 'one' is already used by item '1'"));
    }

    #[test]
    fn test_blank_id_fails() {
        let items = vec![item(" ", Some("one"))];
        let errors = validate_catalog(&items).unwrap_err();
        assert!(errors[0].contains("id cannot be empty"));
    }

    #[test]
    fn test_missing_slugs() {
        let items = vec![item("1", Some("one")), item("2", None), item("3", Some(""))];
        let hidden: Vec<&str> = missing_slugs(&items)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(hidden, vec!["2", "3"]);
    }
}
