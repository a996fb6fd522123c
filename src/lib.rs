#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod events;
pub mod guards;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;
pub use events::{
    ActionType, AgentState, EventSource, ObservationType, OpenHandsAction, OpenHandsEvent,
    OpenHandsObservation, StatusId, StatusType, StatusUpdate,
};
pub use guards::http::{
    is_http_error_with_error_field, is_http_error_with_message_field, retrieve_error_message,
};
pub use guards::kind::{EventFamily, EventKind, classify_event};
pub use guards::{
    Guard, is_agent_state_change_observation, is_assistant_message, is_command_action,
    is_command_observation, is_error_observation, is_finish_action, is_mcp_observation,
    is_openhands_action, is_openhands_observation, is_reject_observation, is_status_update,
    is_system_message, is_user_message,
};
pub use types::{HttpError, HttpResponse};
