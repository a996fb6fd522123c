use crate::events::StatusType;

/// A status notice pushed alongside the event stream (`status_update: true`).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdate {
    #[serde(rename = "type")]
    pub status_type: StatusType,
    /// Translation key or numeric id of the notice.
    #[serde(default)]
    pub id: Option<StatusId>,
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StatusId {
    Number(i64),
    Key(String),
}

impl StatusUpdate {
    pub fn is_error(&self) -> bool {
        self.status_type == StatusType::Error
    }
}
