//! Scripted in-process transport for tests and demos.
//!
//! The mock implements both communicator traits; which one a [`CommsLink`]
//! built from it will exercise is decided by the constructor
//! ([`MockCommunicator::with_tool_calls`] vs
//! [`MockCommunicator::request_only`]). Behaviors are consumed in FIFO order,
//! one per dispatched call, and every call is recorded for assertions.

use crate::communicator::{CommsLink, Communicator, ToolCallCommunicator};
use crate::error::CommunicatorError;
use serde_json::Value;
use std::collections::VecDeque;
use std::future;
use std::sync::{Arc, Mutex};

/// What the mock does when the next call arrives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Resolve with the given reply mapping.
    Reply(Value),
    /// Fail with a generic transport error carrying this message.
    Fail(String),
    /// Never resolve; drives deadline handling in callers.
    Hang,
}

/// Which trait method a recorded call arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    ToolCall,
    Request,
}

/// One dispatched call, as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub kind: CallKind,
    pub target_service: String,
    /// Tool name for [`CallKind::ToolCall`], method string for
    /// [`CallKind::Request`].
    pub method: String,
    pub params: Value,
}

#[derive(Debug, Default)]
pub struct MockCommunicator {
    tool_calls: bool,
    behaviors: Mutex<VecDeque<MockBehavior>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCommunicator {
    /// Mock whose [`link`](Self::link) is the rich tool-call variant.
    pub fn with_tool_calls() -> Self {
        Self {
            tool_calls: true,
            ..Default::default()
        }
    }

    /// Mock whose [`link`](Self::link) is the request-only variant.
    pub fn request_only() -> Self {
        Self::default()
    }

    /// Append a behavior, builder-style.
    pub fn script(self, behavior: MockBehavior) -> Self {
        self.enqueue(behavior);
        self
    }

    /// Append a behavior after construction.
    pub fn enqueue(&self, behavior: MockBehavior) {
        self.behaviors
            .lock()
            .expect("mock behavior queue poisoned")
            .push_back(behavior);
    }

    /// Snapshot of every call dispatched so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    /// Wrap this mock in the [`CommsLink`] variant it was constructed for.
    pub fn link(self: &Arc<Self>) -> CommsLink {
        if self.tool_calls {
            CommsLink::ToolCall(Arc::clone(self) as Arc<dyn ToolCallCommunicator>)
        } else {
            CommsLink::RequestOnly(Arc::clone(self) as Arc<dyn Communicator>)
        }
    }

    async fn dispatch(&self, call: RecordedCall) -> Result<Value, CommunicatorError> {
        self.calls.lock().expect("mock call log poisoned").push(call);
        let behavior = self
            .behaviors
            .lock()
            .expect("mock behavior queue poisoned")
            .pop_front();
        match behavior {
            Some(MockBehavior::Reply(value)) => Ok(value),
            Some(MockBehavior::Fail(message)) => Err(CommunicatorError::Request(message)),
            Some(MockBehavior::Hang) => future::pending().await,
            None => Err(CommunicatorError::Request(
                "no scripted response left".to_string(),
            )),
        }
    }
}

#[async_trait::async_trait]
impl Communicator for MockCommunicator {
    async fn send_request(
        &self,
        target_service: &str,
        method: &str,
        params: Value,
    ) -> Result<Value, CommunicatorError> {
        self.dispatch(RecordedCall {
            kind: CallKind::Request,
            target_service: target_service.to_string(),
            method: method.to_string(),
            params,
        })
        .await
    }
}

#[async_trait::async_trait]
impl ToolCallCommunicator for MockCommunicator {
    async fn call_tool(
        &self,
        target_service: &str,
        tool_name: &str,
        arguments: Value,
    ) -> Result<Value, CommunicatorError> {
        self.dispatch(RecordedCall {
            kind: CallKind::ToolCall,
            target_service: target_service.to_string(),
            method: tool_name.to_string(),
            params: arguments,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_behaviors_consumed_in_order() {
        let mock = MockCommunicator::request_only()
            .script(MockBehavior::Reply(json!({"status": "success"})))
            .script(MockBehavior::Fail("boom".to_string()));

        let first = mock
            .send_request("svc", "tool/call/a", json!({}))
            .await
            .unwrap();
        assert_eq!(first, json!({"status": "success"}));

        let second = mock
            .send_request("svc", "tool/call/b", json!({}))
            .await
            .unwrap_err();
        assert_eq!(second.to_string(), "boom");

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, "tool/call/a");
        assert_eq!(calls[1].method, "tool/call/b");
    }

    #[tokio::test]
    async fn test_unscripted_call_fails() {
        let mock = MockCommunicator::with_tool_calls();
        let error = mock
            .call_tool("svc", "process_data", json!({}))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "no scripted response left");
    }
}
