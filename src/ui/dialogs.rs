use colored::Colorize;

/// Semantic level of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One line of feedback after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, StatusLevel::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, StatusLevel::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, StatusLevel::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, StatusLevel::Error)
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

/// Print a status message with its semantic color
pub fn set_status(status: &StatusMessage) {
    let text = match status.level {
        StatusLevel::Info => status.text.normal(),
        StatusLevel::Success => status.text.green(),
        StatusLevel::Warning => status.text.yellow(),
        StatusLevel::Error => status.text.red(),
    };
    eprintln!("{}", text);
}

/// Print an error block: title, message, then details
pub fn show_error(title: &str, message: &str, details: &str) {
    eprintln!("{} {}", format!("{}:", title).red().bold(), message);
    for line in details.lines() {
        eprintln!("  {}", line);
    }
}
