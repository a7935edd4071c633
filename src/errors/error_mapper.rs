use machcat_core::CatalogError;
use std::io::ErrorKind;
use std::path::Path;

use crate::operations::ValidationError;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &anyhow::Error, path: &Path) -> (String, String, String) {
    if let Some(validation) = error.downcast_ref::<ValidationError>() {
        return (
            "Validation Error".to_string(),
            "The catalog file has validation errors.".to_string(),
            validation.errors.join("\n"),
        );
    }

    match error.downcast_ref::<CatalogError>() {
        Some(CatalogError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        Some(CatalogError::Io { source, .. }) if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        Some(CatalogError::Json(json_error)) => (
            "Invalid JSON".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            format!(
                "Line {}, column {}: {}",
                json_error.line(),
                json_error.column(),
                json_error
            ),
        ),
        Some(CatalogError::Schema(errors)) => (
            "Schema Error".to_string(),
            "The catalog file does not have the expected structure.".to_string(),
            errors.join("\n"),
        ),
        _ => (
            "Error Loading File".to_string(),
            "Failed to load catalog file.".to_string(),
            error.to_string(),
        ),
    }
}

/// Map reload errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_reload_error(error: &anyhow::Error, path: Option<&Path>) -> (String, String, String) {
    match path {
        None => (
            "Nothing To Reload".to_string(),
            "No catalog file is loaded.".to_string(),
            error.to_string(),
        ),
        Some(path) => {
            let (title, message, details) = map_file_load_error(error, path);
            if title == "File Not Found" {
                (
                    title,
                    message,
                    format!(
                        "Path: {}\n\nThe file may have been moved or deleted.",
                        path.display()
                    ),
                )
            } else if title == "Error Loading File" {
                (
                    "Error Reloading File".to_string(),
                    "Failed to reload catalog file.".to_string(),
                    details,
                )
            } else {
                (title, message, details)
            }
        }
    }
}
