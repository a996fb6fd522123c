pub mod action;
pub mod observation;
pub mod status;

use crate::error::Error;
use crate::guards::kind::EventKind;

pub use action::OpenHandsAction;
pub use observation::OpenHandsObservation;
pub use status::{StatusId, StatusUpdate};

/// Who produced an event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventSource {
    User,
    Agent,
    Environment,
}

/// Value of the `action` discriminant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
    Message,
    System,
    Start,
    Run,
    RunIpython,
    Read,
    Write,
    Edit,
    Browse,
    BrowseInteractive,
    Think,
    Finish,
    Reject,
    Delegate,
    Recall,
    Mcp,
    ChangeAgentState,
    Condensation,
    TaskTracking,
}

/// Value of the `observation` discriminant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ObservationType {
    Run,
    RunIpython,
    Read,
    Write,
    Edit,
    Browse,
    BrowseInteractive,
    Error,
    AgentStateChanged,
    UserRejected,
    Success,
    Delegate,
    Think,
    Recall,
    Mcp,
    Condense,
    TaskTracking,
    Null,
}

/// Agent state carried by `agent_state_changed` observations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentState {
    Loading,
    Init,
    Running,
    AwaitingUserInput,
    Paused,
    Stopped,
    Finished,
    Rejected,
    Error,
    RateLimited,
    AwaitingUserConfirmation,
    UserConfirmed,
    UserRejected,
}

impl AgentState {
    /// States after which the agent will not act again without user input.
    pub fn is_idle(self) -> bool {
        matches!(
            self,
            Self::AwaitingUserInput
                | Self::Paused
                | Self::Stopped
                | Self::Finished
                | Self::Rejected
                | Self::Error
                | Self::AwaitingUserConfirmation
        )
    }
}

/// Severity of a [`StatusUpdate`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatusType {
    Info,
    Error,
}

/// A received event, typed by family.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenHandsEvent {
    Action(OpenHandsAction),
    Observation(OpenHandsObservation),
    StatusUpdate(StatusUpdate),
}

impl OpenHandsEvent {
    /// Type an untyped record.
    ///
    /// The family is picked by discriminant presence in the order action,
    /// observation, status update. A record carrying none of them is an
    /// [`Error::Event`]; a record whose fields do not fit its family is an
    /// [`Error::Json`].
    pub fn from_value(record: &serde_json::Value) -> Result<Self, Error> {
        let Some(obj) = record.as_object() else {
            return Err(Error::Event {
                reason: "event record is not an object".into(),
            });
        };

        if obj.contains_key("action") {
            return Ok(Self::Action(serde_json::from_value(record.clone())?));
        }
        if obj.contains_key("observation") {
            return Ok(Self::Observation(serde_json::from_value(record.clone())?));
        }
        if crate::guards::is_status_update(record) {
            return Ok(Self::StatusUpdate(serde_json::from_value(record.clone())?));
        }

        tracing::debug!(
            keys = ?obj.keys().collect::<Vec<_>>(),
            "record has no event discriminant"
        );
        Err(Error::Event {
            reason: "record carries no action, observation or status_update discriminant".into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let record: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&record)
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Action(action) => action.kind(),
            Self::Observation(observation) => observation.kind(),
            Self::StatusUpdate(_) => EventKind::StatusUpdate,
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Action(action) => Some(action.id),
            Self::Observation(observation) => Some(observation.id),
            Self::StatusUpdate(_) => None,
        }
    }

    pub fn source(&self) -> Option<EventSource> {
        match self {
            Self::Action(action) => Some(action.source),
            Self::Observation(observation) => Some(observation.source),
            Self::StatusUpdate(_) => None,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use strum::VariantNames;

    #[test]
    fn discriminant_enums_roundtrip_wire_strings() {
        for name in ActionType::VARIANTS {
            let parsed = name.parse::<ActionType>().unwrap();
            assert_eq!(parsed.as_ref(), *name);
            assert_eq!(
                serde_json::to_value(parsed).unwrap(),
                serde_json::json!(name)
            );
        }
        for name in ObservationType::VARIANTS {
            let parsed = name.parse::<ObservationType>().unwrap();
            assert_eq!(parsed.to_string(), *name);
        }
        for name in AgentState::VARIANTS {
            assert_eq!(name.parse::<AgentState>().unwrap().as_ref(), *name);
        }
        assert_eq!("run_ipython".parse::<ActionType>().ok(), Some(ActionType::RunIpython));
        assert_eq!(
            "agent_state_changed".parse::<ObservationType>().ok(),
            Some(ObservationType::AgentStateChanged)
        );
        assert_eq!("Run".parse::<ActionType>().ok(), None);
        assert_eq!("bogus".parse::<EventSource>().ok(), None);
    }

    #[test]
    fn idle_agent_states() {
        assert!(AgentState::AwaitingUserInput.is_idle());
        assert!(AgentState::Finished.is_idle());
        assert!(!AgentState::Running.is_idle());
        assert!(!AgentState::Loading.is_idle());
    }

    #[test]
    fn from_value_picks_family_by_discriminant() {
        let action = OpenHandsEvent::from_value(&serde_json::json!({
            "id": 1, "source": "agent", "action": "run",
            "args": { "command": "ls" }, "message": "Running ls"
        }))
        .unwrap();
        assert!(matches!(action, OpenHandsEvent::Action(_)));
        assert_eq!(action.kind(), EventKind::CommandAction);
        assert_eq!(action.id(), Some(1));
        assert_eq!(action.source(), Some(EventSource::Agent));

        let observation = OpenHandsEvent::from_value(&serde_json::json!({
            "id": 2, "source": "agent", "observation": "mcp", "cause": 1,
            "content": "{}", "extras": {}, "message": ""
        }))
        .unwrap();
        assert_eq!(observation.kind(), EventKind::McpObservation);

        let status = OpenHandsEvent::from_value(&serde_json::json!({
            "status_update": true, "type": "info", "id": "STATUS$READY", "message": "ready"
        }))
        .unwrap();
        assert_eq!(status.kind(), EventKind::StatusUpdate);
        assert_eq!(status.id(), None);
        assert_eq!(status.source(), None);
    }

    #[test]
    fn from_value_rejects_records_without_discriminant() {
        let result = OpenHandsEvent::from_value(&serde_json::json!({ "id": 1, "message": "x" }));
        assert!(matches!(result, Err(Error::Event { .. })));

        let result = OpenHandsEvent::from_value(&serde_json::json!({
            "status_update": false, "type": "info", "id": "x", "message": "x"
        }));
        assert!(matches!(result, Err(Error::Event { .. })));

        let result = OpenHandsEvent::from_value(&serde_json::json!([1, 2]));
        assert!(matches!(result, Err(Error::Event { .. })));
    }

    #[test]
    fn from_value_surfaces_malformed_family_fields() {
        let result = OpenHandsEvent::from_value(&serde_json::json!({
            "id": 1, "source": "agent", "action": "not_an_action"
        }));
        assert!(matches!(result, Err(Error::Json(_))));

        let result = OpenHandsEvent::from_value(&serde_json::json!({
            "id": "one", "source": "agent", "observation": "run"
        }));
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn from_json_reports_invalid_json() {
        assert!(matches!(
            OpenHandsEvent::from_json("{not json"),
            Err(Error::Json(_))
        ));
    }
}
