use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::locale::{resolve_block, resolve_text};

/// Locales the catalog content is authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    Tr,
    En,
    Uz,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::Ru, Locale::Tr, Locale::En, Locale::Uz];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Tr => "tr",
            Locale::En => "en",
            Locale::Uz => "uz",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "en-US" and "en_US" select "en"
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str() == primary)
            .ok_or_else(|| {
                let codes: Vec<&str> = Locale::ALL.iter().map(|locale| locale.as_str()).collect();
                format!(
                    "Unsupported locale '{}' (expected one of: {})",
                    s.trim(),
                    codes.join(", ")
                )
            })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facet dimensions a catalog can be narrowed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    ProductType,
    Sector,
    Category,
    Brand,
}

impl Dimension {
    /// Panel order of the filter sidebar
    pub const ALL: [Dimension; 4] = [
        Dimension::ProductType,
        Dimension::Sector,
        Dimension::Category,
        Dimension::Brand,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::ProductType => "productType",
            Dimension::Sector => "sector",
            Dimension::Category => "category",
            Dimension::Brand => "brand",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Dimension::ProductType => "Product types",
            Dimension::Sector => "Sectors",
            Dimension::Category => "Categories",
            Dimension::Brand => "Brands",
        }
    }

    /// Name of a single option of this dimension, for messages
    pub fn noun(self) -> &'static str {
        match self {
            Dimension::ProductType => "product type",
            Dimension::Sector => "sector",
            Dimension::Category => "category",
            Dimension::Brand => "brand",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "producttype" | "product-type" | "product_type" | "type" => Ok(Dimension::ProductType),
            "sector" => Ok(Dimension::Sector),
            "category" => Ok(Dimension::Category),
            "brand" => Ok(Dimension::Brand),
            _ => Err(format!(
                "Unknown dimension '{}' (expected one of: productType, sector, category, brand)",
                s.trim()
            )),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text authored per locale; any locale may be missing
/// A value that is not a string counts as missing for that locale only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(
        default,
        deserialize_with = "deserialize_locale_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub ru: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_locale_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tr: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_locale_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub en: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_locale_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub uz: Option<String>,
}

impl LocalizedText {
    /// Non-empty text for a locale code; unknown codes never match
    pub fn get(&self, code: &str) -> Option<&str> {
        let value = match code {
            "ru" => &self.ru,
            "tr" => &self.tr,
            "en" => &self.en,
            "uz" => &self.uz,
            _ => return None,
        };
        value.as_deref().filter(|text| !text.is_empty())
    }
}

/// A display-text field as the content store delivers it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextField {
    Plain(String),
    Localized(LocalizedText),
    /// Any other shape; resolves to an empty string
    Other(Value),
}

impl TextField {
    pub fn resolve(&self, preferred: &str) -> String {
        resolve_text(Some(self), preferred)
    }
}

impl From<Value> for TextField {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => TextField::Plain(text),
            Value::Object(_) => match serde_json::from_value(value.clone()) {
                Ok(localized) => TextField::Localized(localized),
                Err(_) => TextField::Other(value),
            },
            other => TextField::Other(other),
        }
    }
}

impl From<&str> for TextField {
    fn from(text: &str) -> Self {
        TextField::Plain(text.to_string())
    }
}

impl<'de> Deserialize<'de> for TextField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(TextField::from)
    }
}

/// Rich-text block arrays per locale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tr: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uz: Option<Vec<Value>>,
}

impl LocalizedBlock {
    /// Blocks for a locale code when present, even if the array is empty
    pub fn get(&self, code: &str) -> Option<&[Value]> {
        let value = match code {
            "ru" => &self.ru,
            "tr" => &self.tr,
            "en" => &self.en,
            "uz" => &self.uz,
            _ => return None,
        };
        value.as_deref()
    }
}

/// A referenced taxonomy node (sector, category, brand, product type)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetTerm {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<TextField>,
}

impl FacetTerm {
    pub fn resolved_label(&self, locale: &str) -> String {
        resolve_text(self.label.as_ref(), locale)
    }
}

/// One machine as supplied by the content store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub model_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextField>,
    #[serde(
        default,
        deserialize_with = "deserialize_slug",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<String>,
    /// Opaque image reference, turned into a URL by the content store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_terms")]
    pub sector: Vec<FacetTerm>,
    #[serde(default, deserialize_with = "deserialize_terms")]
    pub category: Vec<FacetTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<FacetTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<FacetTerm>,
    #[serde(
        default,
        deserialize_with = "deserialize_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<LocalizedBlock>,
}

impl CatalogItem {
    /// Items without a slug cannot be linked to and are hidden from browsing
    pub fn is_browsable(&self) -> bool {
        self.slug.as_deref().is_some_and(|slug| !slug.is_empty())
    }

    /// Referenced terms for a dimension, skipping references without an id
    pub fn terms(&self, dimension: Dimension) -> Vec<&FacetTerm> {
        let terms: Vec<&FacetTerm> = match dimension {
            Dimension::ProductType => self.product_type.iter().collect(),
            Dimension::Sector => self.sector.iter().collect(),
            Dimension::Category => self.category.iter().collect(),
            Dimension::Brand => self.brand.iter().collect(),
        };
        terms.into_iter().filter(|term| !term.id.is_empty()).collect()
    }

    /// Resolved title, or the model code when no title text exists
    pub fn display_name(&self, locale: &str) -> String {
        let title = resolve_text(self.title.as_ref(), locale);
        if title.is_empty() {
            self.model_code.clone()
        } else {
            title
        }
    }

    pub fn brand_label(&self, locale: &str) -> String {
        self.brand
            .as_ref()
            .map(|brand| brand.resolved_label(locale))
            .unwrap_or_default()
    }

    pub fn description_blocks(&self, locale: &str) -> Vec<Value> {
        resolve_block(self.description.as_ref(), locale)
    }
}

/// Ids arrive as strings or numbers; `null` becomes an empty id
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let id = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => id,
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    };
    Ok(id)
}

/// Unset fields come back from the content store as `null`
fn deserialize_nullable_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_locale_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Accepts `"slug"` or the content store's `{ "current": "slug" }`
fn deserialize_slug<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let slug = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(slug)) => Some(slug),
        Some(Value::Object(map)) => map
            .get("current")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };
    Ok(slug.filter(|slug| !slug.is_empty()))
}

/// `null` lists and dangling (`null`) references both collapse to nothing
fn deserialize_terms<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<FacetTerm>, D::Error> {
    let terms = Option::<Vec<Option<FacetTerm>>>::deserialize(deserializer)?;
    Ok(terms.unwrap_or_default().into_iter().flatten().collect())
}

fn deserialize_block<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<LocalizedBlock>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// A filter option derived from the current item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
}

/// Filter options for every dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetLists {
    pub product_type: Vec<FacetOption>,
    pub sector: Vec<FacetOption>,
    pub category: Vec<FacetOption>,
    pub brand: Vec<FacetOption>,
}

impl FacetLists {
    pub fn get(&self, dimension: Dimension) -> &[FacetOption] {
        match dimension {
            Dimension::ProductType => &self.product_type,
            Dimension::Sector => &self.sector,
            Dimension::Category => &self.category,
            Dimension::Brand => &self.brand,
        }
    }

    pub(crate) fn get_mut(&mut self, dimension: Dimension) -> &mut Vec<FacetOption> {
        match dimension {
            Dimension::ProductType => &mut self.product_type,
            Dimension::Sector => &mut self.sector,
            Dimension::Category => &mut self.category,
            Dimension::Brand => &mut self.brand,
        }
    }

    pub fn is_empty(&self) -> bool {
        Dimension::ALL.iter().all(|dimension| self.get(*dimension).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("ru".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!("EN-us".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("uz_Latn".parse::<Locale>(), Ok(Locale::Uz));
        assert!("de".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
        assert_eq!(
            "de".parse::<Locale>(),
            Err("Unsupported locale 'de' (expected one of: ru, tr, en, uz)".to_string())
        );
    }

    #[test]
    fn test_dimension_parsing() {
        assert_eq!("productType".parse::<Dimension>(), Ok(Dimension::ProductType));
        assert_eq!("product-type".parse::<Dimension>(), Ok(Dimension::ProductType));
        assert_eq!("Brand".parse::<Dimension>(), Ok(Dimension::Brand));
        assert!("color".parse::<Dimension>().is_err());
        assert_eq!(Dimension::ProductType.noun(), "product type");
    }

    #[test]
    fn test_text_field_shapes() {
        let plain: TextField = serde_json::from_value(json!("Overlock")).unwrap();
        assert_eq!(plain, TextField::Plain("Overlock".to_string()));

        let localized: TextField =
            serde_json::from_value(json!({"_type": "localeString", "ru": "Оверлок"})).unwrap();
        match localized {
            TextField::Localized(text) => assert_eq!(text.get("ru"), Some("Оверлок")),
            other => panic!("expected localized text, got {:?}", other),
        }

        // Only the malformed locale is dropped
        let partly: TextField = serde_json::from_value(json!({"ru": 5, "tr": "Makine"})).unwrap();
        assert_eq!(partly.resolve("ru"), "Makine");
        assert_eq!(partly.resolve("tr"), "Makine");

        let list: TextField = serde_json::from_value(json!(["Overlock"])).unwrap();
        assert!(matches!(list, TextField::Other(_)));

        let number: TextField = serde_json::from_value(json!(42)).unwrap();
        assert!(matches!(number, TextField::Other(_)));
    }

    #[test]
    fn test_localized_text_skips_empty_values() {
        let text = LocalizedText {
            ru: Some(String::new()),
            tr: Some("Makine".to_string()),
            ..Default::default()
        };
        assert_eq!(text.get("ru"), None);
        assert_eq!(text.get("tr"), Some("Makine"));
        assert_eq!(text.get("de"), None);
    }

    #[test]
    fn test_item_deserialization_from_content_store_shape() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "m1",
            "modelCode": "867-190",
            "title": {"ru": "Швейная машина", "tr": "Dikiş makinesi"},
            "slug": {"_type": "slug", "current": "867-190"},
            "imageRef": {"asset": {"_ref": "image-abc"}},
            "sector": [{"id": "s1", "label": {"ru": "Обувь"}}, null],
            "category": null,
            "brand": {"id": "b1", "label": "Durkopp Adler"},
            "productType": null
        }))
        .unwrap();

        assert_eq!(item.slug.as_deref(), Some("867-190"));
        assert!(item.is_browsable());
        assert_eq!(item.sector.len(), 1);
        assert!(item.category.is_empty());
        assert!(item.product_type.is_none());
        assert_eq!(item.brand_label("en"), "Durkopp Adler");
        assert!(item.image_ref.is_some());
    }

    #[test]
    fn test_missing_or_empty_slug_is_not_browsable() {
        let missing: CatalogItem = serde_json::from_value(json!({"id": "a"})).unwrap();
        let null: CatalogItem = serde_json::from_value(json!({"id": "b", "slug": null})).unwrap();
        let empty: CatalogItem =
            serde_json::from_value(json!({"id": "c", "slug": {"current": ""}})).unwrap();

        assert!(!missing.is_browsable());
        assert!(!null.is_browsable());
        assert!(!empty.is_browsable());
    }

    #[test]
    fn test_terms_skip_references_without_id() {
        let item = CatalogItem {
            id: "m1".to_string(),
            sector: vec![
                FacetTerm {
                    id: String::new(),
                    label: None,
                },
                FacetTerm {
                    id: "s2".to_string(),
                    label: None,
                },
            ],
            ..Default::default()
        };

        let ids: Vec<&str> = item
            .terms(Dimension::Sector)
            .iter()
            .map(|term| term.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s2"]);
        assert!(item.terms(Dimension::Brand).is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_model_code() {
        let mut item = CatalogItem {
            id: "m1".to_string(),
            model_code: "KSL-100".to_string(),
            ..Default::default()
        };
        assert_eq!(item.display_name("ru"), "KSL-100");

        item.title = Some(TextField::from("Automatic stitcher"));
        assert_eq!(item.display_name("ru"), "Automatic stitcher");
    }

    #[test]
    fn test_malformed_description_is_dropped() {
        let item: CatalogItem =
            serde_json::from_value(json!({"id": "a", "description": "not blocks"})).unwrap();
        assert!(item.description.is_none());
    }
}
