mod communicator;
pub mod error;
pub mod mock;

pub use communicator::{CommsLink, Communicator, ToolCallCommunicator, TOOL_CALL_METHOD_PREFIX};
pub use error::CommunicatorError;
