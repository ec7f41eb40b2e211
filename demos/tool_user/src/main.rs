//! This demo drives the ToolUserAgent against a scripted transport, with
//! either link variant or a forced failure.

use agentlink::prelude::*;
use clap::{Parser, ValueEnum};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, ValueEnum, Clone)]
pub enum Scenario {
    /// Rich transport, tool call resolves successfully
    ToolCall,
    /// Request-only transport, same reply via tool/call dispatch
    RequestOnly,
    /// Transport fails, agent records the error
    Refused,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, help = "Transport scenario", default_value = "tool-call")]
    scenario: Scenario,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    println!("Running tool_user demo with scenario: {:?}", args.scenario);

    let reply = json!({
        "status": "success",
        "word_count": 9,
        "processed_text": "HELLO, THIS IS A SAMPLE TEXT THAT NEEDS PROCESSING."
    });

    let mock = match args.scenario {
        Scenario::ToolCall => {
            Arc::new(MockCommunicator::with_tool_calls().script(MockBehavior::Reply(reply)))
        }
        Scenario::RequestOnly => {
            Arc::new(MockCommunicator::request_only().script(MockBehavior::Reply(reply)))
        }
        Scenario::Refused => Arc::new(
            MockCommunicator::with_tool_calls()
                .script(MockBehavior::Fail("connection refused".to_string())),
        ),
    };

    let host = AgentHost::new(ToolUserAgent::new(mock.link()));
    let agent = host.execute().await?;

    match (agent.result(), agent.error()) {
        (Some(result), _) => println!("Tool result: {result}"),
        (None, Some(record)) => println!(
            "Tool call failed ({}): {}",
            serde_json::to_value(record.status)?,
            record.error
        ),
        (None, None) => println!("Agent finished without an outcome"),
    }

    for call in mock.calls() {
        println!(
            "Dispatched {:?} '{}' to '{}'",
            call.kind, call.method, call.target_service
        );
    }

    Ok(())
}
