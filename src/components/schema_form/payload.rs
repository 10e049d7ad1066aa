//! Submission payload assembly.
//!
//! Live field values are kept as raw strings (bools for toggles); typing
//! happens here, once, at submit time: toggles become booleans, numeric
//! free-text controls become numbers or null, everything else stays a raw
//! string.

use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use super::plan::{ControlDescriptor, WidgetKind};

/// Payload key carrying the session id when the request had one.
pub const SESSION_KEY: &str = "_session_id";

/// Initial value per control: toggles start unchecked so an untouched
/// checkbox still submits `false`; everything else starts empty.
pub fn default_values(descriptors: &[ControlDescriptor]) -> HashMap<String, Value> {
    descriptors
        .iter()
        .map(|descriptor| {
            let initial = match descriptor.widget {
                WidgetKind::Toggle => Value::Bool(false),
                _ => Value::String(String::new()),
            };
            (descriptor.name.clone(), initial)
        })
        .collect()
}

/// Builds the typed payload for one submit attempt, in control order.
/// `_session_id` is injected iff a session id exists.
pub fn build_payload(
    descriptors: &[ControlDescriptor],
    values: &HashMap<String, Value>,
    session_id: Option<&str>,
) -> Map<String, Value> {
    let mut payload = Map::new();
    for descriptor in descriptors {
        let raw = values.get(&descriptor.name);
        let value = match descriptor.widget {
            WidgetKind::Toggle => Value::Bool(raw.and_then(Value::as_bool).unwrap_or(false)),
            WidgetKind::NumberText => parse_number(raw.and_then(Value::as_str).unwrap_or("")),
            _ => Value::String(raw.and_then(Value::as_str).unwrap_or("").to_string()),
        };
        payload.insert(descriptor.name.clone(), value);
    }
    if let Some(session_id) = session_id {
        payload.insert(SESSION_KEY.to_string(), Value::String(session_id.to_string()));
    }
    payload
}

/// Empty input is null, never zero. Unparsable text also collapses to null,
/// matching the behavior of serializing NaN.
fn parse_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
