pub mod file_handlers;
pub mod filter_handlers;
pub mod ui_handlers;

use machcat_core::{Dimension, Locale, SelectionAction};
use regex::Regex;
use std::path::PathBuf;

use crate::state::{AppState, UiState};
use crate::ui::StatusMessage;

pub use file_handlers::{handle_open, handle_reload};
pub use filter_handlers::handle_selection;
pub use ui_handlers::{handle_group, handle_help, handle_locale, HELP_TEXT};

/// One line typed in the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Selection(SelectionAction),
    Locale(Locale),
    Group(Option<Dimension>),
    Open(PathBuf),
    Reload,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Whether the catalog should be drawn again after this command
    pub fn redraws(&self) -> bool {
        !matches!(self, Command::Help | Command::Quit)
    }
}

/// Parse a command line such as "toggle sector s1" or "group brand"
pub fn parse_command(line: &str) -> Result<Command, String> {
    let re = Regex::new(r"^\s*(?P<cmd>[A-Za-z?]+)(?:\s+(?P<args>.*?))?\s*$")
        .map_err(|e| e.to_string())?;
    let caps = re
        .captures(line)
        .ok_or_else(|| "Empty command. Type 'help' for the list of commands".to_string())?;

    let cmd = caps["cmd"].to_ascii_lowercase();
    let raw_args = caps.name("args").map(|m| m.as_str()).unwrap_or_default();
    let args: Vec<&str> = raw_args.split_whitespace().collect();

    match (cmd.as_str(), args.as_slice()) {
        ("toggle" | "t", [dimension, id]) => Ok(Command::Selection(SelectionAction::ToggleOption(
            dimension.parse()?,
            id.to_string(),
        ))),
        ("expand" | "e", [dimension]) => Ok(Command::Selection(SelectionAction::ToggleExpand(
            dimension.parse()?,
        ))),
        ("clear", []) => Ok(Command::Selection(SelectionAction::ClearAll)),
        ("locale" | "l", [code]) => Ok(Command::Locale(code.parse()?)),
        ("group" | "g", ["off"]) => Ok(Command::Group(None)),
        ("group" | "g", [dimension]) => Ok(Command::Group(Some(dimension.parse()?))),
        // Paths keep their inner spacing
        ("open" | "o", [_, ..]) => Ok(Command::Open(PathBuf::from(raw_args))),
        ("reload" | "r", []) => Ok(Command::Reload),
        ("show" | "s", []) => Ok(Command::Show),
        ("help" | "h" | "?", []) => Ok(Command::Help),
        ("quit" | "q" | "exit", []) => Ok(Command::Quit),
        ("toggle" | "t", _) => Err("Usage: toggle <dimension> <id>".to_string()),
        ("expand" | "e", _) => Err("Usage: expand <dimension>".to_string()),
        ("locale" | "l", _) => Err("Usage: locale <ru|tr|en|uz>".to_string()),
        ("group" | "g", _) => Err("Usage: group <dimension>|off".to_string()),
        ("open" | "o", _) => Err("Usage: open <file>".to_string()),
        _ => Err(format!(
            "Unknown command '{}'. Type 'help' for the list of commands",
            line.trim()
        )),
    }
}

/// Apply a parsed command to the session
pub fn handle_command(state: &mut AppState, ui: &mut UiState, command: Command) -> StatusMessage {
    match command {
        Command::Selection(action) => handle_selection(state, action),
        Command::Locale(locale) => handle_locale(state, locale),
        Command::Group(group_by) => handle_group(ui, group_by),
        Command::Open(path) => handle_open(state, &path),
        Command::Reload => handle_reload(state),
        Command::Show => StatusMessage::info(format!("{} items match", state.view().total_results())),
        Command::Help => handle_help(),
        Command::Quit => {
            ui.quit();
            StatusMessage::info("Bye")
        }
    }
}
