#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("event error: {reason}")]
    Event { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
