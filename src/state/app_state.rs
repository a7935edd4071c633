use anyhow::anyhow;
use machcat_core::*;
use std::path::PathBuf;

use crate::operations::ValidationError;

/// Application state management - Domain state only
/// This struct contains only the catalog and the visitor's browsing state
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded catalog snapshot
    pub items: Vec<CatalogItem>,
    /// Path to current catalog file
    pub current_file: Option<PathBuf>,
    /// Display locale
    pub locale: Locale,
    /// Open panels and selected options
    pub selection: SelectionState,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            items: Vec::new(),
            current_file: None,
            locale,
            selection: SelectionState::new(),
        }
    }

    /// Load a catalog file; a fresh load starts a fresh browsing session
    pub fn load_from_file(&mut self, path: PathBuf) -> anyhow::Result<()> {
        let items = load_catalog(&path)?;
        validate_catalog(&items).map_err(|errors| ValidationError { errors })?;

        self.items = items;
        self.current_file = Some(path);
        self.selection = SelectionState::new();

        Ok(())
    }

    /// Reload the current file from disk
    pub fn reload(&mut self) -> anyhow::Result<()> {
        let path = self
            .current_file
            .clone()
            .ok_or_else(|| anyhow!("No catalog file loaded"))?;
        self.load_from_file(path)
    }

    pub fn dispatch(&mut self, action: SelectionAction) {
        self.selection.dispatch(action);
    }

    /// Facets and results for the current selection and locale
    pub fn view(&self) -> CatalogView {
        CatalogView::build(&self.items, &self.selection, self.locale.as_str())
    }

    /// Get title with file name and locale
    pub fn get_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        format!("Machine Catalog - {} [{}]", file_name, self.locale)
    }
}
