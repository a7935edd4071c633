use crate::facets::extract_facets;
use crate::filtering::apply_selection;
use crate::models::{CatalogItem, FacetLists};
use crate::selection::SelectionState;
use crate::sorting::{prioritize_brands, BRAND_PRIORITY};

/// Everything the catalog page renders for one selection
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Options for every dimension, derived from the whole catalog
    pub facets: FacetLists,
    /// Matching items, priority brands first
    pub results: Vec<CatalogItem>,
}

impl CatalogView {
    pub fn build(items: &[CatalogItem], selection: &SelectionState, locale: &str) -> Self {
        let facets = extract_facets(items, locale);
        let mut results = apply_selection(items, selection);
        prioritize_brands(&mut results, &BRAND_PRIORITY, locale);

        Self { facets, results }
    }

    pub fn total_results(&self) -> usize {
        self.results.len()
    }
}
