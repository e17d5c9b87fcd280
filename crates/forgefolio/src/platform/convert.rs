use serde_json::Value;

/// Flatten a JSON `null` to the empty string.
///
/// Every other value passes through untouched, which makes the function
/// idempotent: normalizing an already-normalized value returns it unchanged.
///
/// # Example
///
/// ```ignore
/// use forgefolio::platform::null_to_empty;
/// use serde_json::{Value, json};
///
/// assert_eq!(null_to_empty(Value::Null), json!(""));
/// assert_eq!(null_to_empty(json!("kept")), json!("kept"));
/// ```
#[must_use]
pub fn null_to_empty(value: Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        other => other,
    }
}

/// Apply the same flattening to a typed optional string field.
///
/// Serde folds both an absent key and an explicit `null` into `None` for
/// `Option<String>` fields, so this is the single place where profile fields
/// take their empty-string default.
#[must_use]
pub fn string_or_empty(field: Option<String>) -> String {
    match null_to_empty(field.map_or(Value::Null, Value::String)) {
        Value::String(s) => s,
        _ => String::new(),
    }
}
