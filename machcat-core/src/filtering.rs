use crate::models::{CatalogItem, Dimension};
use crate::selection::SelectionState;
use tracing::debug;

/// Parse selection strings in the format "dimension=id" into a selection
/// Multiple ids for the same dimension are combined
pub fn parse_selection_args(args: &[String]) -> Result<SelectionState, String> {
    let mut selected = Vec::with_capacity(args.len());

    for arg in args {
        let (key, id) = arg
            .split_once('=')
            .ok_or_else(|| format!("Invalid selection '{}'. Expected 'dimension=id'", arg))?;
        let dimension: Dimension = key.parse()?;
        let id = id.trim();
        if id.is_empty() {
            return Err(format!("Selection '{}' has an empty id", arg));
        }
        selected.push((dimension, id.to_string()));
    }

    Ok(SelectionState::with_selected(selected))
}

/// Apply a selection to a list of items, returning only those that match
/// Input order is preserved
pub fn apply_selection(items: &[CatalogItem], selection: &SelectionState) -> Vec<CatalogItem> {
    let matched: Vec<CatalogItem> = items
        .iter()
        .filter(|item| matches_selection(item, selection))
        .cloned()
        .collect();

    debug!(
        items = items.len(),
        matched = matched.len(),
        selected = selection.selected_count(),
        "Applied selection"
    );

    matched
}

/// Check if an item matches the given selection
/// AND between dimensions, OR within a dimension; dimensions without
/// a selection do not narrow. Items without a slug never match.
pub fn matches_selection(item: &CatalogItem, selection: &SelectionState) -> bool {
    if !item.is_browsable() {
        return false;
    }

    Dimension::ALL.into_iter().all(|dimension| {
        let selected = selection.selected(dimension);
        selected.is_empty()
            || item
                .terms(dimension)
                .iter()
                .any(|term| selected.contains(&term.id))
    })
}
