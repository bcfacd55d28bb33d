use serde_json::Value;

use crate::domain::LanguageRegistry;

use super::error::{ApiError, INVALID_TEXT};

/// `text` must be a non-empty JSON string.
pub fn required_text(body: &Value) -> Result<String, ApiError> {
    match body.get("text") {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        _ => Err(ApiError::validation(INVALID_TEXT)),
    }
}

/// Optional language-name field. Non-string or empty values count as absent.
pub fn optional_name(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
}

/// In strict mode unknown names are a caller fault; otherwise anything goes.
pub fn check_language(
    registry: &LanguageRegistry,
    strict: bool,
    name: Option<&str>,
) -> Result<(), ApiError> {
    match name {
        Some(name) if strict && registry.lookup(name).is_none() => Err(ApiError::validation(
            format!("Unsupported language '{}'", name),
        )),
        _ => Ok(()),
    }
}
