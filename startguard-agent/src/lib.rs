//! Console collaborators and configuration for the Startguard agent.
//!
//! The watch loop only knows the trait boundaries; this crate supplies the
//! terminal-flavored implementations the binary wires in: a stderr-free
//! console notification sink and a stdin allow/deny prompt.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use startguard_types::{Decision, EntryName};
use startguard_watch::{ApprovalPrompt, Notification, NotificationSink, WatchError, WatchResult};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::info;

/// File-based configuration, merged under the command-line flags.
///
/// All fields are optional; anything absent falls back to the flag value
/// or the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Poll interval in milliseconds.
    pub interval_ms: Option<u64>,
    /// Store scope directories, highest priority first.
    pub scopes: Option<Vec<PathBuf>>,
    /// Seconds to wait for a decision before denying by default.
    pub prompt_timeout_secs: Option<u64>,
}

impl AgentConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// A [`NotificationSink`] that prints alerts to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleSink;

#[async_trait]
impl NotificationSink for ConsoleSink {
    async fn notify(&self, notification: &Notification) {
        info!("{}", notification.title);
        println!("\n[{}] {}", notification.title, notification.body);
    }
}

/// An [`ApprovalPrompt`] reading y/n answers from standard input.
pub struct StdinPrompt {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdinPrompt {
    /// Creates a prompt over this process's stdin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApprovalPrompt for StdinPrompt {
    async fn ask(&self, name: &EntryName) -> WatchResult<Decision> {
        let mut lines = self.lines.lock().await;
        loop {
            {
                let mut out = tokio::io::stdout();
                let question = format!("Allow autostart entry '{name}'? [y/N] ");
                let _ = out.write_all(question.as_bytes()).await;
                let _ = out.flush().await;
            }
            match lines.next_line().await {
                Ok(Some(answer)) => match answer.trim().to_ascii_lowercase().as_str() {
                    "y" | "yes" => return Ok(Decision::Allow),
                    "n" | "no" | "" => return Ok(Decision::Deny),
                    other => println!("Unrecognized answer '{other}', expected y or n."),
                },
                // EOF or a broken terminal: nobody is going to answer.
                Ok(None) | Err(_) => return Err(WatchError::PromptClosed),
            }
        }
    }
}
