use machcat_core::Dimension;

/// Terminal flow state management
/// This struct contains only presentation state (grouping, session loop)
#[derive(Debug)]
pub struct UiState {
    /// Group results by a dimension instead of listing them flat
    pub group_by: Option<Dimension>,
    /// Whether the interactive session keeps reading commands
    pub running: bool,
}

impl UiState {
    pub fn new(group_by: Option<Dimension>) -> Self {
        Self {
            group_by,
            running: true,
        }
    }

    /// Request the interactive session to end
    pub fn quit(&mut self) {
        self.running = false;
    }
}
