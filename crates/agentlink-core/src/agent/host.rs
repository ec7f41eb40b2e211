use crate::agent::error::AgentError;
use crate::agent::{Agent, AgentState};
use log::{debug, info};

/// Drives an agent through its lifecycle: `setup`, `run`, `shutdown`, each
/// exactly once and in that order.
///
/// The host tracks the agent's [`AgentState`] and refuses out-of-order or
/// repeated phases, so a finished agent cannot be re-run through it.
pub struct AgentHost<A: Agent> {
    agent: A,
    state: AgentState,
}

impl<A: Agent> AgentHost<A> {
    pub fn new(agent: A) -> Self {
        Self {
            agent,
            state: AgentState::Created,
        }
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Access the hosted agent, typically to inspect its stored outcome
    /// after `run`.
    pub fn agent(&self) -> &A {
        &self.agent
    }

    fn expect_state(&self, expected: AgentState, phase: &'static str) -> Result<(), AgentError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(AgentError::InvalidTransition {
                from: self.state,
                phase,
            })
        }
    }

    pub async fn setup(&mut self) -> Result<(), AgentError> {
        self.expect_state(AgentState::Created, "setup")?;
        debug!("Host entering setup for '{}'", self.agent.name());
        self.agent.setup().await?;
        self.state = AgentState::SetupComplete;
        Ok(())
    }

    pub async fn run(&mut self) -> Result<(), AgentError> {
        self.expect_state(AgentState::SetupComplete, "run")?;
        debug!("Host entering run for '{}'", self.agent.name());
        self.agent.run().await?;
        self.state = AgentState::RunComplete;
        Ok(())
    }

    pub async fn shutdown(&mut self) -> Result<(), AgentError> {
        self.expect_state(AgentState::RunComplete, "shutdown")?;
        debug!("Host entering shutdown for '{}'", self.agent.name());
        self.agent.shutdown().await?;
        self.state = AgentState::ShutdownComplete;
        Ok(())
    }

    /// Run the whole lifecycle and hand the agent back for inspection.
    pub async fn execute(mut self) -> Result<A, AgentError> {
        self.setup().await?;
        self.run().await?;
        self.shutdown().await?;
        info!("Agent '{}' lifecycle complete", self.agent.name());
        Ok(self.agent)
    }
}
