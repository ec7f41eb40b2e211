use crate::agent::AgentState;
use agentlink_comms::CommunicatorError;

/// Errors surfaced by agents and the lifecycle host.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// A lifecycle phase was requested out of order or more than once.
    #[error("phase '{phase}' not allowed from state '{from}'")]
    InvalidTransition {
        from: AgentState,
        phase: &'static str,
    },

    #[error("setup failed: {0}")]
    Setup(String),

    /// For agents that propagate transport failures instead of recording
    /// them.
    #[error("communicator error: {0}")]
    Communicator(#[from] CommunicatorError),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = AgentError::InvalidTransition {
            from: AgentState::RunComplete,
            phase: "run",
        };
        assert_eq!(
            error.to_string(),
            "phase 'run' not allowed from state 'run-complete'"
        );
    }

    #[test]
    fn test_communicator_error_conversion() {
        let error: AgentError = CommunicatorError::Request("boom".to_string()).into();
        assert_eq!(error.to_string(), "communicator error: boom");
    }
}
