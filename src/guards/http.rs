use serde_json::Value;

use crate::types::HttpError;

/// JavaScript truthiness: `null`, `false`, `0` and `""` are falsy; objects
/// and arrays are truthy even when empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_normal() || f.is_subnormal()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn has_truthy_field(error: &HttpError, field: &str) -> bool {
    error
        .data()
        .and_then(|data| data.get(field))
        .is_some_and(is_truthy)
}

fn payload_text<'a>(error: &'a HttpError, field: &str) -> Option<&'a str> {
    error
        .data()?
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}

/// The response body carries a truthy `error` field.
pub fn is_http_error_with_error_field(error: &HttpError) -> bool {
    has_truthy_field(error, "error")
}

/// The response body carries a truthy `message` field.
pub fn is_http_error_with_message_field(error: &HttpError) -> bool {
    has_truthy_field(error, "message")
}

/// Best human-readable message for a failed request.
///
/// Precedence: body `error`, then body `message`, then the client's own
/// `message`.
pub fn retrieve_error_message(error: &HttpError) -> &str {
    payload_text(error, "error")
        .or_else(|| payload_text(error, "message"))
        .unwrap_or(error.message.as_str())
}
