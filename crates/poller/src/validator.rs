//! Structural validation of the upstream response body.
//!
//! Runs before any field access. Violations here are contract errors with the
//! upstream, not per-item data problems.

use serde_json::Value;

use reviewbot_common::error::BotError;

const HOMEWORKS_KEY: &str = "homeworks";

/// Check the response against the documented shape and extract the work-item
/// list.
///
/// An empty list is valid (nothing was reviewed since the cursor) and
/// deliberately distinct from a missing `homeworks` key.
pub fn validate(body: &Value) -> Result<&[Value], BotError> {
    let is_empty = match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(flag) => !flag,
        Value::Number(num) => num.as_f64() == Some(0.0),
    };
    if is_empty {
        return Err(BotError::EmptyResponse);
    }

    let map = body
        .as_object()
        .ok_or(BotError::Shape("тело ответа не является словарём"))?;

    let homeworks = map
        .get(HOMEWORKS_KEY)
        .ok_or(BotError::MissingKey(HOMEWORKS_KEY))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(BotError::Shape("значение 'homeworks' не является списком"))
}
