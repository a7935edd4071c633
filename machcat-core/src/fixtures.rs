use crate::models::{CatalogItem, FacetTerm, LocalizedText, TextField};

pub fn item(id: &str, slug: Option<&str>) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        model_code: format!("M-{}", id),
        slug: slug.map(str::to_string),
        ..Default::default()
    }
}

pub fn plain_term(id: &str, label: &str) -> FacetTerm {
    FacetTerm {
        id: id.to_string(),
        label: Some(TextField::from(label)),
    }
}

pub fn term(id: &str, ru: &str, tr: &str) -> FacetTerm {
    FacetTerm {
        id: id.to_string(),
        label: Some(TextField::Localized(LocalizedText {
            ru: Some(ru.to_string()),
            tr: Some(tr.to_string()),
            ..Default::default()
        })),
    }
}
