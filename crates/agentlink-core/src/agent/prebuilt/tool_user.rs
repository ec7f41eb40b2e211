use crate::agent::config::AgentConfig;
use crate::agent::error::AgentError;
use crate::agent::Agent;
use agentlink_comms::CommsLink;
use async_trait::async_trait;
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;

/// Tool exposed by the remote provider that this agent invokes.
const PROCESS_DATA_TOOL: &str = "process_data";

/// Settings for [`ToolUserAgent`]; the defaults reproduce the canonical
/// demo scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolUserConfig {
    /// Logical identifier of the remote service providing the tool
    #[serde(default = "default_target_service")]
    pub target_service: String,
    /// Text sent as the tool payload
    #[serde(default = "default_sample_text")]
    pub sample_text: String,
    /// Deadline for the tool call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
}

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    agent: ToolUserConfig,
}

fn default_target_service() -> String {
    "tool_provider".to_string()
}

fn default_sample_text() -> String {
    "Hello, this is a sample text that needs processing.".to_string()
}

fn default_timeout_secs() -> f64 {
    10.0
}

impl Default for ToolUserConfig {
    fn default() -> Self {
        Self {
            target_service: default_target_service(),
            sample_text: default_sample_text(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ToolUserConfig {
    /// Load settings from the `[agent]` table of a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AgentError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AgentError::Config(e.to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| AgentError::Config(e.to_string()))?;
        Ok(config.agent)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }
}

/// Status tag of an [`ErrorRecord`]; serializes lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatus {
    Timeout,
    Error,
}

/// Failure of the outbound call, kept for inspection after `run`. Mutually
/// exclusive with a stored result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
    pub status: ErrorStatus,
}

/// Agent that calls the `process_data` tool on a remote provider once during
/// its run phase and records the outcome.
///
/// The transport variant is fixed at construction through [`CommsLink`]: a
/// rich link invokes the tool natively, a request-only link dispatches
/// `tool/call/process_data`. Call failures never escape `run`; they end up in
/// [`ToolUserAgent::error`] while successful replies, whatever their payload
/// says, end up in [`ToolUserAgent::result`].
pub struct ToolUserAgent {
    config: AgentConfig,
    settings: ToolUserConfig,
    link: CommsLink,
    result: Option<Value>,
    error: Option<ErrorRecord>,
}

impl ToolUserAgent {
    pub fn new(link: CommsLink) -> Self {
        Self::with_settings(link, ToolUserConfig::default())
    }

    pub fn with_settings(link: CommsLink, settings: ToolUserConfig) -> Self {
        Self {
            config: AgentConfig::new(
                "ToolUserAgent",
                "Calls the process_data tool on a remote provider",
            ),
            settings,
            link,
            result: None,
            error: None,
        }
    }

    /// Reply mapping of the last successful call, verbatim.
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// Failure record of the last call, if it timed out or errored.
    pub fn error(&self) -> Option<&ErrorRecord> {
        self.error.as_ref()
    }
}

#[async_trait]
impl Agent for ToolUserAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn setup(&mut self) -> Result<(), AgentError> {
        info!("Setting up {}", self.name());
        self.result = None;
        self.error = None;
        info!("{} setup complete", self.name());
        Ok(())
    }

    async fn run(&mut self) -> Result<(), AgentError> {
        info!("{} running, calling {PROCESS_DATA_TOOL} tool", self.name());

        let payload = json!({ "text": self.settings.sample_text });
        let timeout = self.settings.timeout();

        info!("Calling tool '{PROCESS_DATA_TOOL}' with payload: {payload}");

        match self
            .link
            .invoke_tool(
                &self.settings.target_service,
                PROCESS_DATA_TOOL,
                payload,
                timeout,
            )
            .await
        {
            Ok(result) => {
                info!("Received tool result: {result}");

                if result.get("status").and_then(Value::as_str) == Some("success") {
                    info!(
                        "Successfully processed text. Word count: {}",
                        result.get("word_count").unwrap_or(&Value::Null)
                    );
                    info!(
                        "Processed text: {}",
                        result.get("processed_text").unwrap_or(&Value::Null)
                    );
                } else {
                    error!(
                        "Tool call failed: {}",
                        result.get("error").unwrap_or(&Value::Null)
                    );
                }

                self.result = Some(result);
            }
            Err(err) if err.is_timeout() => {
                let message = format!(
                    "Tool call to '{PROCESS_DATA_TOOL}' timed out after {:.1} seconds",
                    timeout.as_secs_f64()
                );
                error!("{message}");
                self.error = Some(ErrorRecord {
                    error: message,
                    status: ErrorStatus::Timeout,
                });
            }
            Err(err) => {
                let message = err.to_string();
                error!("Error calling tool: {message}");
                self.error = Some(ErrorRecord {
                    error: message,
                    status: ErrorStatus::Error,
                });
            }
        }

        info!("{} completed its run method", self.name());
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<(), AgentError> {
        info!("{} shutting down", self.name());
        Ok(())
    }
}
