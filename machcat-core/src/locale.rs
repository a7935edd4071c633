use serde_json::Value;
use std::iter;

use crate::models::{LocalizedBlock, TextField};

/// Locales probed after the preferred one, in this exact order
pub const FALLBACK_ORDER: [&str; 4] = ["ru", "tr", "en", "uz"];

/// Resolve a text field to a display string
///
/// Plain strings pass through unchanged. Localized text probes the preferred
/// locale, then [`FALLBACK_ORDER`], and returns the first non-empty value.
/// Missing and malformed fields resolve to an empty string.
pub fn resolve_text(field: Option<&TextField>, preferred: &str) -> String {
    match field {
        Some(TextField::Plain(text)) => text.clone(),
        Some(TextField::Localized(text)) => probe_order(preferred)
            .find_map(|code| text.get(code))
            .unwrap_or_default()
            .to_string(),
        Some(TextField::Other(_)) | None => String::new(),
    }
}

/// Resolve localized rich-text blocks with the same probe order as [`resolve_text`]
///
/// A locale whose block array is present wins even when the array is empty.
pub fn resolve_block(block: Option<&LocalizedBlock>, preferred: &str) -> Vec<Value> {
    let Some(block) = block else {
        return Vec::new();
    };

    probe_order(preferred)
        .find_map(|code| block.get(code))
        .map(<[Value]>::to_vec)
        .unwrap_or_default()
}

/// Flatten portable-text blocks into plain paragraphs
pub fn block_plain_text(blocks: &[Value]) -> String {
    blocks
        .iter()
        .filter_map(|block| {
            let spans = block.get("children")?.as_array()?;
            let text: String = spans
                .iter()
                .filter_map(|span| span.get("text").and_then(Value::as_str))
                .collect();
            (!text.is_empty()).then_some(text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn probe_order(preferred: &str) -> impl Iterator<Item = &str> {
    iter::once(preferred).chain(FALLBACK_ORDER)
}
