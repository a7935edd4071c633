use crate::models::Dimension;
use std::collections::BTreeSet;

/// Panel open when a browsing session starts
pub const DEFAULT_EXPANDED: Dimension = Dimension::ProductType;

/// Filter panel of one dimension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub expanded: bool,
    pub selected: BTreeSet<String>,
}

/// Transitions of the filter sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Open or close a dimension's panel
    ToggleExpand(Dimension),
    /// Select an option id, or deselect it when already selected
    ToggleOption(Dimension, String),
    /// Deselect everything in every dimension
    ClearAll,
}

/// Which panels are open and which option ids are selected, per dimension
///
/// Selected ids are not checked against the current facet lists; a stale id
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    panels: [PanelState; 4],
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        let mut panels: [PanelState; 4] = Default::default();
        panels[DEFAULT_EXPANDED.index()].expanded = true;
        Self { panels }
    }

    /// Start a session with some ids already selected
    pub fn with_selected<I>(selected: I) -> Self
    where
        I: IntoIterator<Item = (Dimension, String)>,
    {
        let mut state = Self::new();
        for (dimension, id) in selected {
            state.panels[dimension.index()].selected.insert(id);
        }
        state
    }

    /// Pure transition: the state after `action`
    pub fn reduce(&self, action: &SelectionAction) -> Self {
        let mut next = self.clone();

        match action {
            SelectionAction::ToggleExpand(dimension) => {
                let panel = &mut next.panels[dimension.index()];
                panel.expanded = !panel.expanded;
            }
            SelectionAction::ToggleOption(dimension, id) => {
                let selected = &mut next.panels[dimension.index()].selected;
                if !selected.remove(id) {
                    selected.insert(id.clone());
                }
            }
            SelectionAction::ClearAll => {
                for panel in &mut next.panels {
                    panel.selected.clear();
                }
            }
        }

        next
    }

    /// Apply `action`, replacing the whole state in a single assignment
    pub fn dispatch(&mut self, action: SelectionAction) {
        *self = self.reduce(&action);
    }

    pub fn panel(&self, dimension: Dimension) -> &PanelState {
        &self.panels[dimension.index()]
    }

    pub fn is_expanded(&self, dimension: Dimension) -> bool {
        self.panel(dimension).expanded
    }

    pub fn selected(&self, dimension: Dimension) -> &BTreeSet<String> {
        &self.panel(dimension).selected
    }

    pub fn is_selected(&self, dimension: Dimension, id: &str) -> bool {
        self.selected(dimension).contains(id)
    }

    /// Whether any dimension narrows the results
    pub fn has_selection(&self) -> bool {
        self.panels.iter().any(|panel| !panel.selected.is_empty())
    }

    pub fn selected_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.selected.len()).sum()
    }
}
