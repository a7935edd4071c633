use serde_json::{json, Value};

/// JSON Schema of a catalog snapshot as exported from the content store
/// Display texts are left unconstrained; malformed ones resolve to empty strings
pub fn catalog_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Machine catalog snapshot",
        "type": "array",
        "items": { "$ref": "#/definitions/item" },
        "definitions": {
            "id": { "type": ["string", "number"] },
            "term": {
                "type": "object",
                "properties": {
                    "id": {
                        "anyOf": [{ "type": "null" }, { "$ref": "#/definitions/id" }]
                    }
                }
            },
            "nullableTerm": {
                "anyOf": [{ "type": "null" }, { "$ref": "#/definitions/term" }]
            },
            "termList": {
                "anyOf": [
                    { "type": "null" },
                    { "type": "array", "items": { "$ref": "#/definitions/nullableTerm" } }
                ]
            },
            "item": {
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": { "$ref": "#/definitions/id" },
                    "modelCode": { "type": ["string", "null"] },
                    "slug": {
                        "anyOf": [
                            { "type": "null" },
                            { "type": "string" },
                            {
                                "type": "object",
                                "properties": { "current": { "type": "string" } }
                            }
                        ]
                    },
                    "sector": { "$ref": "#/definitions/termList" },
                    "category": { "$ref": "#/definitions/termList" },
                    "brand": { "$ref": "#/definitions/nullableTerm" },
                    "productType": { "$ref": "#/definitions/nullableTerm" }
                }
            }
        }
    })
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_snapshot_passes() {
        let data = json!([
            {
                "id": "m1",
                "modelCode": "867",
                "title": { "ru": "Машина" },
                "slug": { "current": "867" },
                "sector": [{ "id": "s1", "label": { "tr": "Ayakkabı" } }, null],
                "category": null,
                "brand": { "id": "b1", "label": "Durkopp Adler" },
                "productType": null
            },
            { "id": "m2", "slug": "m2", "title": 17 }
        ]);

        assert!(validate_against_schema(&catalog_schema(), &data).is_ok());
    }

    #[test]
    fn test_unset_scalars_pass() {
        let data = json!([
            { "id": 1, "modelCode": null, "title": null, "brand": { "id": 7 } },
            { "id": "m2", "sector": [{ "id": null, "label": "Shoes" }] }
        ]);

        assert!(validate_against_schema(&catalog_schema(), &data).is_ok());
    }

    #[test]
    fn test_missing_id_fails() {
        let data = json!([{ "slug": "x" }]);
        let errors = validate_against_schema(&catalog_schema(), &data).unwrap_err();
        assert!(errors[0].contains("/0"));
    }

    #[test]
    fn test_wrong_term_shape_fails() {
        let data = json!([{ "id": "m1", "brand": ["b1"] }]);
        assert!(validate_against_schema(&catalog_schema(), &data).is_err());

        let data = json!([{ "id": "m1", "sector": [{ "id": true }] }]);
        assert!(validate_against_schema(&catalog_schema(), &data).is_err());
    }

    #[test]
    fn test_object_document_fails() {
        let data = json!({ "machines": [] });
        let errors = validate_against_schema(&catalog_schema(), &data).unwrap_err();
        assert!(errors[0].ends_with("at root"));
    }
}
