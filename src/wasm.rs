use serde::Serialize;
use strum::VariantNames;
use wasm_bindgen::prelude::*;

use crate::guards::http::retrieve_error_message;
use crate::guards::kind::classify_event;
use crate::guards::{self, Guard};
use crate::types::HttpError;

const INVALID_ERROR_PAYLOAD: &str = "Invalid error payload";

fn to_js(value: &serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn parse_record(json: &str) -> Option<serde_json::Value> {
    serde_json::from_str(json).ok()
}

/// Evaluate a named guard (e.g. `"is_command_action"`) against a JSON record.
#[wasm_bindgen]
pub fn check_guard(guard: &str, json: &str) -> bool {
    let Ok(guard) = guard.parse::<Guard>() else {
        return false;
    };
    parse_record(json).is_some_and(|record| guard.check(&record))
}

/// Names of every guard the JSON record satisfies.
#[wasm_bindgen]
pub fn matching_guards(json: &str) -> JsValue {
    let Some(record) = parse_record(json) else {
        return error_result("Invalid JSON");
    };
    to_js(&serde_json::json!(Guard::matching(&record)))
}

/// Classify a JSON record into its most specific event kind.
#[wasm_bindgen]
pub fn classify_json(json: &str) -> JsValue {
    let Some(record) = parse_record(json) else {
        return error_result("Invalid JSON");
    };

    match classify_event(&record) {
        Some(kind) => to_js(&serde_json::json!({
            "kind": kind.as_ref(),
            "family": kind.family().as_ref(),
        })),
        None => error_result("Record has no action, observation or status_update discriminant"),
    }
}

#[wasm_bindgen]
pub fn is_status_update_json(json: &str) -> bool {
    parse_record(json).is_some_and(|record| guards::is_status_update(&record))
}

/// Resolve the display message of a serialized HTTP client error.
#[wasm_bindgen]
pub fn retrieve_error_message_json(json: &str) -> String {
    let Some(value) = parse_record(json) else {
        return INVALID_ERROR_PAYLOAD.to_string();
    };
    match HttpError::from_value(&value) {
        Ok(error) => retrieve_error_message(&error).to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable http error payload");
            INVALID_ERROR_PAYLOAD.to_string()
        }
    }
}

/// All guard names accepted by [`check_guard`].
#[wasm_bindgen]
pub fn list_guards() -> JsValue {
    to_js(&serde_json::json!(Guard::VARIANTS))
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
