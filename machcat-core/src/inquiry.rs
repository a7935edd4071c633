use crate::models::{CatalogItem, FacetTerm};
use serde::Serialize;

/// What an item is, for the "want to know more" call to action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InquiryKind {
    Machine,
    Material,
    Needle,
    Part,
    Product,
}

/// Keywords checked in order against the Turkish product-type label
const KEYWORDS: [(InquiryKind, &[&str]); 4] = [
    (InquiryKind::Material, &["malzeme", "material"]),
    (InquiryKind::Needle, &["iğne", "needle", "igna"]),
    (InquiryKind::Part, &["parça", "part", "qism"]),
    (InquiryKind::Machine, &["makine", "machine", "mashina"]),
];

impl InquiryKind {
    pub fn for_product_type(product_type: Option<&FacetTerm>) -> Self {
        let Some(label) = product_type.and_then(|term| term.label.as_ref()) else {
            return InquiryKind::Machine;
        };

        // Lowercasing the Turkish dotted 'İ' leaves a combining dot after the 'i'
        let name = label.resolve("tr").to_lowercase().replace('\u{307}', "");
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| name.contains(word)))
            .map(|(kind, _)| *kind)
            .unwrap_or(InquiryKind::Product)
    }

    pub fn for_item(item: &CatalogItem) -> Self {
        Self::for_product_type(item.product_type.as_ref())
    }

    /// Key of the call-to-action string in the site's translations
    pub fn translation_key(self) -> &'static str {
        match self {
            InquiryKind::Machine => "wantToKnowMore",
            InquiryKind::Material => "wantToKnowMoreMaterial",
            InquiryKind::Needle => "wantToKnowMoreNeedle",
            InquiryKind::Part => "wantToKnowMorePart",
            InquiryKind::Product => "wantToKnowMoreProduct",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{plain_term, term};

    #[test]
    fn test_kind_from_turkish_label() {
        let cases = [
            (term("t1", "Материалы", "Sarf Malzemesi"), InquiryKind::Material),
            (term("t2", "Иглы", "Dikiş iğnesi"), InquiryKind::Needle),
            (term("t6", "Иглы", "Dikiş İğneleri"), InquiryKind::Needle),
            (term("t3", "Запчасти", "Yedek Parça"), InquiryKind::Part),
            (term("t4", "Машины", "Dikiş Makinesi"), InquiryKind::Machine),
            (term("t5", "Аксессуары", "Aksesuar"), InquiryKind::Product),
        ];

        for (product_type, expected) in cases {
            assert_eq!(InquiryKind::for_product_type(Some(&product_type)), expected);
        }
    }

    #[test]
    fn test_earlier_keywords_win() {
        // "material" is checked before "part"
        let mixed = plain_term("t1", "Material parts");
        assert_eq!(InquiryKind::for_product_type(Some(&mixed)), InquiryKind::Material);
    }

    #[test]
    fn test_missing_product_type_defaults_to_machine() {
        assert_eq!(InquiryKind::for_product_type(None), InquiryKind::Machine);

        let unlabeled = FacetTerm {
            id: "t1".to_string(),
            label: None,
        };
        assert_eq!(InquiryKind::for_product_type(Some(&unlabeled)), InquiryKind::Machine);
        assert_eq!(InquiryKind::Machine.translation_key(), "wantToKnowMore");
    }
}
