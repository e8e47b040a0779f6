// src/domain/text_list.rs

use serde_json::Value;

/// Decodes a list stored as text, either a JSON array or comma separated.
///
/// An empty or missing column is `None`, so callers can tell "no data" apart
/// from an empty list. Anything that is not a JSON array falls back to a
/// comma split; this never fails.
pub fn decode_text_list(field: Option<&str>) -> Option<Vec<String>> {
    let raw = field.filter(|s| !s.is_empty())?;

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => Some(split_commas(raw)),
    }
}

fn split_commas(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the JSON price history column. Unreadable history is dropped
/// rather than failing the whole record.
pub fn decode_price_history(field: Option<&str>) -> Option<Value> {
    let raw = field.filter(|s| !s.is_empty())?;

    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring unparsable price history {raw:?}: {e}");
            None
        }
    }
}
