mod base;
mod config;
pub mod error;
mod host;
pub mod prebuilt;

pub use base::{Agent, AgentState};
pub use config::AgentConfig;
pub use error::AgentError;
pub use host::AgentHost;
