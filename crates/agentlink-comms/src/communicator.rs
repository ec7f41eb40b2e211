use crate::error::CommunicatorError;
use log::debug;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Method prefix used when a tool call is dispatched over a request-only
/// transport.
pub const TOOL_CALL_METHOD_PREFIX: &str = "tool/call/";

/// Transport capable of dispatching a generic request to a remote service.
///
/// Implementations resolve to the remote's reply mapping or fail with a
/// transport-level error. Deadlines are not a transport concern; they are
/// owned by [`CommsLink::invoke_tool`].
#[async_trait::async_trait]
pub trait Communicator: Send + Sync {
    async fn send_request(
        &self,
        target_service: &str,
        method: &str,
        params: Value,
    ) -> Result<Value, CommunicatorError>;
}

/// Transport that additionally understands tool invocation natively, so tool
/// calls do not need to be encoded into a method string.
#[async_trait::async_trait]
pub trait ToolCallCommunicator: Communicator {
    async fn call_tool(
        &self,
        target_service: &str,
        tool_name: &str,
        arguments: Value,
    ) -> Result<Value, CommunicatorError>;
}

/// Handle to the transport an agent talks through, fixed at construction
/// time.
///
/// The two variants replace runtime capability probing: a rich transport is
/// wrapped in [`CommsLink::ToolCall`] and invoked through
/// [`ToolCallCommunicator::call_tool`], while a basic transport is wrapped in
/// [`CommsLink::RequestOnly`] and reached via
/// [`Communicator::send_request`] with a `tool/call/<name>` method string.
#[derive(Clone)]
pub enum CommsLink {
    ToolCall(Arc<dyn ToolCallCommunicator>),
    RequestOnly(Arc<dyn Communicator>),
}

impl CommsLink {
    /// Invoke a named tool on a remote service, routed per variant, with an
    /// explicit deadline.
    ///
    /// The underlying call is awaited at exactly one suspend point; if the
    /// deadline elapses first the call is abandoned and
    /// [`CommunicatorError::Timeout`] is returned. No retry is attempted.
    pub async fn invoke_tool(
        &self,
        target_service: &str,
        tool_name: &str,
        arguments: Value,
        timeout: Duration,
    ) -> Result<Value, CommunicatorError> {
        let method = format!("{TOOL_CALL_METHOD_PREFIX}{tool_name}");
        let call = async {
            match self {
                CommsLink::ToolCall(communicator) => {
                    debug!("Dispatching tool '{tool_name}' to '{target_service}' via call_tool");
                    communicator
                        .call_tool(target_service, tool_name, arguments)
                        .await
                }
                CommsLink::RequestOnly(communicator) => {
                    debug!("Dispatching '{method}' to '{target_service}' via send_request");
                    communicator
                        .send_request(target_service, &method, arguments)
                        .await
                }
            }
        };

        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(CommunicatorError::Timeout { method, timeout }),
        }
    }
}

impl fmt::Debug for CommsLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommsLink::ToolCall(_) => f.write_str("CommsLink::ToolCall"),
            CommsLink::RequestOnly(_) => f.write_str("CommsLink::RequestOnly"),
        }
    }
}
