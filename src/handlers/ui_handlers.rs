use machcat_core::{Dimension, Locale};

use crate::state::{AppState, UiState};
use crate::ui::StatusMessage;

pub const HELP_TEXT: &str = "\
Commands:
  toggle <dimension> <id>   Select or deselect an option (alias: t)
  expand <dimension>        Open or close a filter panel (alias: e)
  clear                     Deselect every option
  locale <ru|tr|en|uz>      Switch the display language (alias: l)
  group <dimension>|off     Group results by a dimension (alias: g)
  open <file>               Load another catalog file (alias: o)
  reload                    Re-read the current catalog file (alias: r)
  show                      Draw the catalog again (alias: s)
  help                      Show this help (alias: h, ?)
  quit                      Leave the session (alias: q, exit)

Dimensions: productType, sector, category, brand";

/// Switch the display locale; selections are ids and survive the switch
pub fn handle_locale(state: &mut AppState, locale: Locale) -> StatusMessage {
    state.locale = locale;
    StatusMessage::info(format!("Locale set to {}", locale))
}

/// Turn result grouping on or off
pub fn handle_group(ui: &mut UiState, group_by: Option<Dimension>) -> StatusMessage {
    ui.group_by = group_by;
    match group_by {
        Some(dimension) => StatusMessage::info(format!("Grouping by {}", dimension.title())),
        None => StatusMessage::info("Grouping off"),
    }
}

pub fn handle_help() -> StatusMessage {
    StatusMessage::info(HELP_TEXT)
}
