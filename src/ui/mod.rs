pub mod dialogs;
pub mod formatting;
pub mod updates;

pub use dialogs::{set_status, show_error, StatusLevel, StatusMessage};
pub use formatting::{
    format_active_filters, format_facet_panels, format_grouped_results, format_item,
    format_results,
};
pub use updates::{render_catalog, render_json};
