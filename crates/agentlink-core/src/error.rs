use crate::agent::AgentError;
use agentlink_comms::CommunicatorError;

/// Top-level error type for consumers that do not care which layer failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Agent error: {0}")]
    AgentError(#[from] AgentError),

    #[error("Communicator error: {0}")]
    CommunicatorError(#[from] CommunicatorError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentState;

    #[test]
    fn test_error_display_wraps_agent_error() {
        let error: Error = AgentError::InvalidTransition {
            from: AgentState::Created,
            phase: "run",
        }
        .into();
        assert!(error.to_string().contains("Agent error"));
        assert!(error.to_string().contains("run"));
    }

    #[test]
    fn test_error_display_wraps_communicator_error() {
        let error: Error = CommunicatorError::Request("connection refused".to_string()).into();
        assert_eq!(error.to_string(), "Communicator error: connection refused");
    }
}
