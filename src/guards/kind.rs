use serde_json::Value;

use crate::guards;

/// The most specific named category of an event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    UserMessage,
    AssistantMessage,
    SystemMessage,
    CommandAction,
    FinishAction,
    OtherAction,
    CommandObservation,
    ErrorObservation,
    AgentStateChange,
    RejectObservation,
    McpObservation,
    OtherObservation,
    StatusUpdate,
}

/// Top-level shape an [`EventKind`] belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventFamily {
    Action,
    Observation,
    StatusUpdate,
}

impl EventKind {
    pub fn family(self) -> EventFamily {
        match self {
            Self::UserMessage
            | Self::AssistantMessage
            | Self::SystemMessage
            | Self::CommandAction
            | Self::FinishAction
            | Self::OtherAction => EventFamily::Action,
            Self::CommandObservation
            | Self::ErrorObservation
            | Self::AgentStateChange
            | Self::RejectObservation
            | Self::McpObservation
            | Self::OtherObservation => EventFamily::Observation,
            Self::StatusUpdate => EventFamily::StatusUpdate,
        }
    }

    pub fn is_action_family(self) -> bool {
        self.family() == EventFamily::Action
    }

    pub fn is_observation_family(self) -> bool {
        self.family() == EventFamily::Observation
    }
}

/// Canonical single-label classification of an untyped record.
///
/// Families are tried in the order action, observation, status update, so a
/// record that satisfies guards from several families gets the first one.
/// Returns `None` when no family guard matches.
pub fn classify_event(record: &Value) -> Option<EventKind> {
    let kind = if guards::is_openhands_action(record) {
        classify_action(record)
    } else if guards::is_openhands_observation(record) {
        classify_observation(record)
    } else if guards::is_status_update(record) {
        EventKind::StatusUpdate
    } else {
        tracing::trace!("record matches no event family");
        return None;
    };
    tracing::trace!(%kind, "classified event");
    Some(kind)
}

fn classify_action(record: &Value) -> EventKind {
    if guards::is_user_message(record) {
        EventKind::UserMessage
    } else if guards::is_assistant_message(record) {
        EventKind::AssistantMessage
    } else if guards::is_system_message(record) {
        EventKind::SystemMessage
    } else if guards::is_command_action(record) {
        EventKind::CommandAction
    } else if guards::is_finish_action(record) {
        EventKind::FinishAction
    } else {
        EventKind::OtherAction
    }
}

fn classify_observation(record: &Value) -> EventKind {
    if guards::is_command_observation(record) {
        EventKind::CommandObservation
    } else if guards::is_error_observation(record) {
        EventKind::ErrorObservation
    } else if guards::is_agent_state_change_observation(record) {
        EventKind::AgentStateChange
    } else if guards::is_reject_observation(record) {
        EventKind::RejectObservation
    } else if guards::is_mcp_observation(record) {
        EventKind::McpObservation
    } else {
        EventKind::OtherObservation
    }
}
