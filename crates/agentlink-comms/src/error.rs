use std::time::Duration;

/// Errors surfaced by communicators and the [`CommsLink`](crate::CommsLink)
/// deadline wrapper.
#[derive(Debug, thiserror::Error)]
pub enum CommunicatorError {
    /// The outbound call did not resolve before its deadline.
    #[error("request '{method}' timed out after {}s", timeout.as_secs_f64())]
    Timeout { method: String, timeout: Duration },

    /// Any other transport-level failure. Displays as the bare message so
    /// callers can surface the transport's description verbatim.
    #[error("{0}")]
    Request(String),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommunicatorError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, CommunicatorError::Timeout { .. })
    }
}
