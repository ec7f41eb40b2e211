pub mod agent;
pub mod error;

pub use agent::{Agent, AgentConfig, AgentError, AgentHost, AgentState};
pub use error::Error;
