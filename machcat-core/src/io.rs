use crate::models::CatalogItem;
use crate::schema_validation::{catalog_schema, validate_against_schema};
use crate::validation::missing_slugs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a catalog snapshot
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog does not match the expected schema:\n{}", .0.join("\n"))]
    Schema(Vec<String>),
}

/// Load a catalog snapshot from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_catalog(&contents)?;
    debug!(path = %path.display(), items = items.len(), "Loaded catalog snapshot");
    Ok(items)
}

/// Parse a snapshot: either a top-level array or `{ "items": [...] }`
pub fn parse_catalog(contents: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let document: Value = serde_json::from_str(contents)?;
    let items = match document {
        Value::Object(mut map) if map.contains_key("items") => {
            map.remove("items").unwrap_or(Value::Null)
        }
        other => other,
    };

    validate_against_schema(&catalog_schema(), &items).map_err(CatalogError::Schema)?;
    let items: Vec<CatalogItem> = serde_json::from_value(items)?;

    let hidden = missing_slugs(&items);
    if !hidden.is_empty() {
        let hidden: Vec<(&str, &str)> = hidden
            .iter()
            .map(|item| (item.id.as_str(), item.model_code.as_str()))
            .collect();
        warn!(count = hidden.len(), items = ?hidden, "Catalog items without a slug are hidden from browsing");
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionState;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog_from_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "m1", "modelCode": "867", "slug": {{"current": "867"}}}}, {{"id": "m2"}}]"#
        )
        .unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_browsable());
        assert!(!items[1].is_browsable());
    }

    #[test]
    fn test_parse_catalog_from_items_object() {
        let items = parse_catalog(r#"{"items": [{"id": "m1", "slug": "m1"}]}"#).unwrap();
        assert_eq!(items[0].id, "m1");
    }

    #[test]
    fn test_unset_model_code_and_title_are_tolerated() {
        let items = parse_catalog(
            r#"[
                {"id": "m1", "slug": "a", "modelCode": null, "title": null},
                {"id": "m2", "slug": "b", "modelCode": "867", "title": {"ru": 5, "tr": "Makine"}}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].model_code, "");
        assert_eq!(items[0].display_name("ru"), "");
        assert_eq!(items[1].display_name("ru"), "Makine");
    }

    #[test]
    fn test_numeric_ids_are_read_as_strings() {
        let items = parse_catalog(
            r#"[
                {"id": 1, "slug": "x", "sector": [{"id": "s1"}], "brand": {"id": "b1"}},
                {"id": 2, "slug": null, "sector": [{"id": "s1"}], "productType": {"id": 30}}
            ]"#,
        )
        .unwrap();

        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].id, "2");
        assert_eq!(items[1].product_type.as_ref().map(|term| term.id.as_str()), Some("30"));

        let view = crate::view::CatalogView::build(&items, &SelectionState::new(), "ru");
        assert_eq!(view.total_results(), 1);
        assert_eq!(view.facets.sector.len(), 1);
        assert_eq!(view.facets.brand[0].id, "b1");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = load_catalog("/definitely/not/here.json").unwrap_err();
        assert!(matches!(error, CatalogError::Io { .. }));
        assert!(error.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let error = parse_catalog("[{").unwrap_err();
        assert!(matches!(error, CatalogError::Json(_)));
    }

    #[test]
    fn test_schema_mismatch_is_schema_error() {
        let error = parse_catalog(r#"[{"slug": "x"}]"#).unwrap_err();
        match error {
            CatalogError::Schema(errors) => assert!(!errors.is_empty()),
            other => panic!("expected schema error, got {:?}", other),
        }
    }
}
