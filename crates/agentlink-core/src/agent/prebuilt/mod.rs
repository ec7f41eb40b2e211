mod tool_user;

pub use tool_user::{ErrorRecord, ErrorStatus, ToolUserAgent, ToolUserConfig};
