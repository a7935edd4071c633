use std::path::Path;

use crate::operations::FileOperations;
use crate::state::AppState;
use crate::ui::StatusMessage;

/// Open another catalog file; the current one stays loaded when this fails
pub fn handle_open(state: &mut AppState, path: &Path) -> StatusMessage {
    FileOperations::new(state).load_file(path)
}

/// Re-read the current catalog file from disk
pub fn handle_reload(state: &mut AppState) -> StatusMessage {
    FileOperations::new(state).reload()
}
