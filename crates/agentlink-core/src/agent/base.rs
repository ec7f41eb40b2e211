use crate::agent::config::AgentConfig;
use crate::agent::error::AgentError;
use async_trait::async_trait;
use std::fmt;

/// Lifecycle phases an agent moves through, in order. The progression is
/// linear with no re-entry; [`AgentHost`](crate::agent::AgentHost) enforces
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    #[default]
    Created,
    SetupComplete,
    RunComplete,
    ShutdownComplete,
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentState::Created => "created",
            AgentState::SetupComplete => "setup-complete",
            AgentState::RunComplete => "run-complete",
            AgentState::ShutdownComplete => "shutdown-complete",
        };
        f.write_str(name)
    }
}

/// An agent driven through `setup`, `run`, `shutdown`, each awaited exactly
/// once and in that order by its host.
///
/// Failures an agent can handle itself (such as a tool call going wrong)
/// should be absorbed and recorded rather than returned; a returned error
/// aborts the remaining phases.
#[async_trait]
pub trait Agent: Send {
    fn config(&self) -> &AgentConfig;

    fn name(&self) -> &str {
        &self.config().name
    }

    async fn setup(&mut self) -> Result<(), AgentError>;

    async fn run(&mut self) -> Result<(), AgentError>;

    async fn shutdown(&mut self) -> Result<(), AgentError>;
}
