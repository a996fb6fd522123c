//! Structural predicates over untyped event records.
//!
//! Each guard tests the necessary conditions for one named shape and nothing
//! more. Guards never fail and never enforce mutual exclusivity: a record built
//! with both an `action` and an `observation` key satisfies both family guards.

pub mod http;
pub mod kind;

use serde_json::Value;

use crate::events::{ActionType, EventSource, ObservationType};

fn has_key(record: &Value, key: &str) -> bool {
    record.as_object().is_some_and(|obj| obj.contains_key(key))
}

fn action_type(record: &Value) -> Option<ActionType> {
    record.get("action")?.as_str()?.parse().ok()
}

fn observation_type(record: &Value) -> Option<ObservationType> {
    record.get("observation")?.as_str()?.parse().ok()
}

fn event_source(record: &Value) -> Option<EventSource> {
    record.get("source")?.as_str()?.parse().ok()
}

fn is_action_of(record: &Value, expected: ActionType) -> bool {
    is_openhands_action(record) && action_type(record) == Some(expected)
}

fn is_observation_of(record: &Value, expected: ObservationType) -> bool {
    is_openhands_observation(record) && observation_type(record) == Some(expected)
}

fn is_action_from(record: &Value, expected: ActionType, source: EventSource) -> bool {
    is_action_of(record, expected) && event_source(record) == Some(source)
}

/// The record carries an `action` key, whatever its value.
pub fn is_openhands_action(record: &Value) -> bool {
    has_key(record, "action")
}

/// The record carries an `observation` key, whatever its value.
pub fn is_openhands_observation(record: &Value) -> bool {
    has_key(record, "observation")
}

/// A `message` action sent by the user.
pub fn is_user_message(record: &Value) -> bool {
    is_action_from(record, ActionType::Message, EventSource::User)
}

/// A `message` action sent by the agent.
pub fn is_assistant_message(record: &Value) -> bool {
    is_action_from(record, ActionType::Message, EventSource::Agent)
}

/// The agent's `system` action carrying its prompt and tools.
pub fn is_system_message(record: &Value) -> bool {
    is_action_from(record, ActionType::System, EventSource::Agent)
}

/// A `run` action (shell command).
pub fn is_command_action(record: &Value) -> bool {
    is_action_of(record, ActionType::Run)
}

/// A `finish` action ending the agent's turn.
pub fn is_finish_action(record: &Value) -> bool {
    is_action_of(record, ActionType::Finish)
}

/// Output of a `run` action.
pub fn is_command_observation(record: &Value) -> bool {
    is_observation_of(record, ObservationType::Run)
}

/// An `error` observation.
pub fn is_error_observation(record: &Value) -> bool {
    is_observation_of(record, ObservationType::Error)
}

/// An `agent_state_changed` observation.
pub fn is_agent_state_change_observation(record: &Value) -> bool {
    is_observation_of(record, ObservationType::AgentStateChanged)
}

/// A `user_rejected` observation.
pub fn is_reject_observation(record: &Value) -> bool {
    is_observation_of(record, ObservationType::UserRejected)
}

/// Result of an MCP tool call (`mcp` observation).
pub fn is_mcp_observation(record: &Value) -> bool {
    is_observation_of(record, ObservationType::Mcp)
}

/// `status_update` must be the boolean `true`; truthy non-booleans do not count.
pub fn is_status_update(record: &Value) -> bool {
    record.get("status_update") == Some(&Value::Bool(true))
}

/// Every event guard, addressable by its snake_case name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
    strum_macros::VariantNames,
)]
#[strum(serialize_all = "snake_case")]
pub enum Guard {
    IsOpenhandsAction,
    IsOpenhandsObservation,
    IsUserMessage,
    IsAssistantMessage,
    IsSystemMessage,
    IsCommandAction,
    IsFinishAction,
    IsCommandObservation,
    IsErrorObservation,
    IsAgentStateChangeObservation,
    IsRejectObservation,
    IsMcpObservation,
    IsStatusUpdate,
}

impl Guard {
    pub const ALL: [Self; 13] = [
        Self::IsOpenhandsAction,
        Self::IsOpenhandsObservation,
        Self::IsUserMessage,
        Self::IsAssistantMessage,
        Self::IsSystemMessage,
        Self::IsCommandAction,
        Self::IsFinishAction,
        Self::IsCommandObservation,
        Self::IsErrorObservation,
        Self::IsAgentStateChangeObservation,
        Self::IsRejectObservation,
        Self::IsMcpObservation,
        Self::IsStatusUpdate,
    ];

    /// Guards that match one observation discriminant value.
    pub const OBSERVATION_SUBTYPES: [Self; 5] = [
        Self::IsCommandObservation,
        Self::IsErrorObservation,
        Self::IsAgentStateChangeObservation,
        Self::IsRejectObservation,
        Self::IsMcpObservation,
    ];

    /// Run the guard this variant names.
    pub fn check(self, record: &Value) -> bool {
        match self {
            Self::IsOpenhandsAction => is_openhands_action(record),
            Self::IsOpenhandsObservation => is_openhands_observation(record),
            Self::IsUserMessage => is_user_message(record),
            Self::IsAssistantMessage => is_assistant_message(record),
            Self::IsSystemMessage => is_system_message(record),
            Self::IsCommandAction => is_command_action(record),
            Self::IsFinishAction => is_finish_action(record),
            Self::IsCommandObservation => is_command_observation(record),
            Self::IsErrorObservation => is_error_observation(record),
            Self::IsAgentStateChangeObservation => is_agent_state_change_observation(record),
            Self::IsRejectObservation => is_reject_observation(record),
            Self::IsMcpObservation => is_mcp_observation(record),
            Self::IsStatusUpdate => is_status_update(record),
        }
    }

    /// Names of the guards `record` satisfies.
    pub fn matching(record: &Value) -> Vec<&'static str> {
        Self::ALL
            .iter()
            .filter(|g| g.check(record))
            .map(|g| -> &'static str { g.into() })
            .collect()
    }
}
