use crate::events::{ActionType, EventSource};
use crate::guards::kind::EventKind;

/// An action-family event: something the user or the agent asked to happen.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpenHandsAction {
    pub id: i64,
    pub source: EventSource,
    pub action: ActionType,
    /// Action-specific arguments; `command` for `run`, `content` for `message`.
    #[serde(default)]
    pub args: serde_json::Value,
    #[serde(default)]
    pub message: String,
    /// ISO-8601 timestamp as sent by the server.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl OpenHandsAction {
    pub fn kind(&self) -> EventKind {
        match (self.action, self.source) {
            (ActionType::Message, EventSource::User) => EventKind::UserMessage,
            (ActionType::Message, EventSource::Agent) => EventKind::AssistantMessage,
            (ActionType::System, EventSource::Agent) => EventKind::SystemMessage,
            (ActionType::Run, _) => EventKind::CommandAction,
            (ActionType::Finish, _) => EventKind::FinishAction,
            _ => EventKind::OtherAction,
        }
    }

    /// Shell command of a `run` action.
    pub fn command(&self) -> Option<&str> {
        if self.action != ActionType::Run {
            return None;
        }
        self.args.get("command").and_then(|v| v.as_str())
    }

    pub fn thought(&self) -> Option<&str> {
        self.args
            .get("thought")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}
