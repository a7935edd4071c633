use std::path::Path;
use tracing::info;

use crate::errors::{map_file_load_error, map_reload_error};
use crate::state::AppState;
use crate::ui::{show_error, StatusMessage};

/// File operations orchestration
/// Handles catalog I/O with error mapping and status reporting
pub struct FileOperations<'a> {
    state: &'a mut AppState,
}

impl<'a> FileOperations<'a> {
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    /// Load a catalog file from the given path
    pub fn load_file(&mut self, path: &Path) -> StatusMessage {
        match self.state.load_from_file(path.to_path_buf()) {
            Ok(()) => {
                info!(path = %path.display(), items = self.state.items.len(), "Catalog loaded");
                StatusMessage::success(format!(
                    "Loaded {} items from {}",
                    self.state.items.len(),
                    path.display()
                ))
            }
            Err(e) => {
                let (title, message, details) = map_file_load_error(&e, path);
                show_error(&title, &message, &details);
                StatusMessage::error("Catalog not loaded")
            }
        }
    }

    /// Reload the current catalog file, starting a fresh browsing session
    pub fn reload(&mut self) -> StatusMessage {
        match self.state.reload() {
            Ok(()) => StatusMessage::success(format!(
                "Reloaded {} items; filters cleared",
                self.state.items.len()
            )),
            Err(e) => {
                let path = self.state.current_file.clone();
                let (title, message, details) = map_reload_error(&e, path.as_deref());
                show_error(&title, &message, &details);
                StatusMessage::error("Reload failed")
            }
        }
    }
}
