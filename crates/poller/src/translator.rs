//! Work-item to notification-text translation.
//!
//! Pure function: validates the item's required fields and renders the fixed
//! verdict sentence. "Key absent" and "value unrecognized" are distinct
//! failures so the recipient can tell a broken payload from a new status code.

use serde_json::Value;

use reviewbot_common::error::BotError;
use reviewbot_common::types::Verdict;

/// Build the notification text for one reviewed work item.
pub fn translate(item: &Value) -> Result<String, BotError> {
    let name = match item.get("homework_name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => return Err(BotError::MissingName),
    };

    let status = item.get("status").ok_or(BotError::MissingStatusKey)?;

    // Report string statuses bare, without the JSON quoting Value::to_string adds.
    let verdict = match status.as_str() {
        Some(code) => {
            Verdict::parse(code).ok_or_else(|| BotError::UnknownVerdict(code.to_string()))?
        }
        None => return Err(BotError::UnknownVerdict(status.to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        verdict.text()
    ))
}
