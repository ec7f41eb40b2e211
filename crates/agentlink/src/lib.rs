// Re-export for convenience
pub use agentlink_comms::{self as comms, error as comms_error};
pub use agentlink_core::{self as core, error as core_error};
pub use async_trait::async_trait;
pub mod prelude;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
/// This is a no-op if the feature is not enabled.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}

// No unit tests: the re-exports are exercised through the prelude in
// integration tests and the demo binary.
