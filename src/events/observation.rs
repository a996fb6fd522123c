use crate::error::Error;
use crate::events::{AgentState, EventSource, ObservationType};
use crate::guards::kind::EventKind;

/// An observation-family event: the outcome of an earlier action.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpenHandsObservation {
    pub id: i64,
    pub source: EventSource,
    pub observation: ObservationType,
    /// Id of the action this observation answers.
    #[serde(default)]
    pub cause: Option<i64>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub extras: serde_json::Value,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl OpenHandsObservation {
    pub fn kind(&self) -> EventKind {
        match self.observation {
            ObservationType::Run => EventKind::CommandObservation,
            ObservationType::Error => EventKind::ErrorObservation,
            ObservationType::AgentStateChanged => EventKind::AgentStateChange,
            ObservationType::UserRejected => EventKind::RejectObservation,
            ObservationType::Mcp => EventKind::McpObservation,
            _ => EventKind::OtherObservation,
        }
    }

    /// New agent state reported by an `agent_state_changed` observation.
    pub fn agent_state(&self) -> Result<AgentState, Error> {
        if self.observation != ObservationType::AgentStateChanged {
            return Err(Error::Event {
                reason: format!("{} observation carries no agent state", self.observation),
            });
        }
        let raw = self
            .extras
            .get("agent_state")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Parse {
                reason: "missing agent_state in agent_state_changed extras".into(),
            })?;
        raw.parse::<AgentState>().map_err(|_| Error::Parse {
            reason: format!("unknown agent state: {raw}"),
        })
    }

    /// Exit code of a `run` observation.
    pub fn exit_code(&self) -> Option<i64> {
        if self.observation != ObservationType::Run {
            return None;
        }
        self.extras
            .get("metadata")
            .and_then(|m| m.get("exit_code"))
            .or_else(|| self.extras.get("exit_code"))
            .and_then(|v| v.as_i64())
    }
}
