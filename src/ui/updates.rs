use colored::Colorize;
use machcat_core::{FacetLists, InquiryKind, Locale};
use serde::Serialize;

use crate::state::{AppState, UiState};
use crate::ui::formatting::{
    format_active_filters, format_facet_panels, format_grouped_results, format_results,
};

/// Machine-readable snapshot of the catalog view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView {
    locale: Locale,
    total_results: usize,
    facets: FacetLists,
    results: Vec<JsonItem>,
}

/// One result card in JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonItem {
    id: String,
    slug: Option<String>,
    name: String,
    model_code: String,
    brand: String,
    inquiry: &'static str,
}

/// Render the whole screen from the current state: title, filter panels, then results
pub fn render_catalog(state: &AppState, ui: &UiState) -> String {
    let locale = state.locale.as_str();
    let view = state.view();

    let mut out = format!("# {}\n\n", state.get_title().bold());
    out.push_str(&format_facet_panels(&view.facets, &state.selection));
    out.push_str("\n\n");

    let active = format_active_filters(&view.facets, &state.selection);
    if !active.is_empty() {
        out.push_str(&format!("{} {}\n\n", "Active filters:".bold(), active));
    }

    match ui.group_by {
        Some(dimension) if !view.results.is_empty() => {
            out.push_str(&format!("Total results: {}\n", view.total_results()));
            out.push_str(&format_grouped_results(&view.results, dimension, locale));
        }
        _ => out.push_str(&format_results(&view, locale)),
    }

    out
}

/// Render the current view as pretty-printed JSON
pub fn render_json(state: &AppState) -> anyhow::Result<String> {
    let locale = state.locale.as_str();
    let view = state.view();

    let results = view
        .results
        .iter()
        .map(|item| JsonItem {
            id: item.id.clone(),
            slug: item.slug.clone(),
            name: item.display_name(locale),
            model_code: item.model_code.clone(),
            brand: item.brand_label(locale),
            inquiry: InquiryKind::for_item(item).translation_key(),
        })
        .collect();

    let json_view = JsonView {
        locale: state.locale,
        total_results: view.total_results(),
        facets: view.facets,
        results,
    };

    Ok(serde_json::to_string_pretty(&json_view)?)
}
