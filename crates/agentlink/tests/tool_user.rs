use agentlink::prelude::*;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn tool_user_round_trip_through_prelude() {
    let reply = json!({
        "status": "success",
        "word_count": 9,
        "processed_text": "HELLO, THIS IS A SAMPLE TEXT THAT NEEDS PROCESSING."
    });
    let mock =
        Arc::new(MockCommunicator::with_tool_calls().script(MockBehavior::Reply(reply.clone())));

    let host = AgentHost::new(ToolUserAgent::new(mock.link()));
    let agent = host.execute().await.unwrap();

    assert_eq!(agent.result(), Some(&reply));
    assert!(agent.error().is_none());
}

#[tokio::test]
async fn lifecycle_cannot_be_replayed() {
    let mock = Arc::new(
        MockCommunicator::with_tool_calls().script(MockBehavior::Reply(json!({"status": "ok"}))),
    );

    let mut host = AgentHost::new(ToolUserAgent::new(mock.link()));
    host.setup().await.unwrap();
    host.run().await.unwrap();
    host.shutdown().await.unwrap();
    assert_eq!(host.state(), AgentState::ShutdownComplete);

    assert!(host.run().await.is_err());
    // Only the original call ever went out.
    assert_eq!(mock.calls().len(), 1);
}
