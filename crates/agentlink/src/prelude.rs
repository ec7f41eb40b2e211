//! Agentlink prelude: common traits and types for quick start.

// Core agent types
pub use crate::core::agent::prebuilt::{ErrorRecord, ErrorStatus, ToolUserAgent, ToolUserConfig};
pub use crate::core::agent::{Agent, AgentConfig, AgentHost, AgentState};

// Communicators
pub use crate::comms::mock::{MockBehavior, MockCommunicator};
pub use crate::comms::{CommsLink, Communicator, ToolCallCommunicator};

// Errors
pub use crate::comms::CommunicatorError;
pub use crate::core::agent::AgentError;
pub use crate::core::error::Error;

// Utils
pub use crate::init_logging;
