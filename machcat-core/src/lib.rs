// Public modules
pub mod facets;
pub mod filtering;
pub mod grouping;
pub mod inquiry;
pub mod io;
pub mod locale;
pub mod models;
pub mod schema_validation;
pub mod selection;
pub mod sorting;
pub mod validation;
pub mod view;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types for convenience
pub use facets::extract_facets;
pub use filtering::{apply_selection, matches_selection, parse_selection_args};
pub use grouping::{group_items_by_dimension, sorted_group_names, UNSPECIFIED_GROUP};
pub use inquiry::InquiryKind;
pub use io::{load_catalog, parse_catalog, CatalogError};
pub use locale::{block_plain_text, resolve_block, resolve_text, FALLBACK_ORDER};
pub use models::{
    CatalogItem, Dimension, FacetLists, FacetOption, FacetTerm, Locale, LocalizedBlock,
    LocalizedText, TextField,
};
pub use schema_validation::{catalog_schema, validate_against_schema};
pub use selection::{PanelState, SelectionAction, SelectionState, DEFAULT_EXPANDED};
pub use sorting::{
    brand_rank, collation_key, compare_labels, normalize_for_sorting, prioritize_brands,
    BRAND_PRIORITY,
};
pub use validation::{missing_slugs, validate_catalog};
pub use view::CatalogView;
