use machcat_core::SelectionAction;
use tracing::debug;

use crate::state::AppState;
use crate::ui::StatusMessage;

/// Apply a sidebar action and report how many items match afterwards
pub fn handle_selection(state: &mut AppState, action: SelectionAction) -> StatusMessage {
    match action {
        SelectionAction::ToggleExpand(dimension) => {
            state.dispatch(SelectionAction::ToggleExpand(dimension));
            let verb = if state.selection.is_expanded(dimension) {
                "Expanded"
            } else {
                "Collapsed"
            };
            StatusMessage::info(format!("{} {}", verb, dimension.title()))
        }
        SelectionAction::ToggleOption(dimension, id) => {
            let already_selected = state.selection.is_selected(dimension, &id);
            let offered = state
                .view()
                .facets
                .get(dimension)
                .iter()
                .any(|option| option.id == id);

            // Deselecting an id that is no longer offered is always allowed
            if !offered && !already_selected {
                return StatusMessage::warning(format!(
                    "No {} option with id '{}'",
                    dimension.noun(),
                    id
                ));
            }

            state.dispatch(SelectionAction::ToggleOption(dimension, id.clone()));
            let total = state.view().total_results();
            debug!(%dimension, id = %id, total, "Toggled option");

            let verb = if already_selected { "Deselected" } else { "Selected" };
            StatusMessage::info(format!(
                "{} {} '{}': {} items match",
                verb,
                dimension.noun(),
                id,
                total
            ))
        }
        SelectionAction::ClearAll => {
            state.dispatch(SelectionAction::ClearAll);
            StatusMessage::info(format!(
                "Filters cleared: {} items match",
                state.view().total_results()
            ))
        }
    }
}
