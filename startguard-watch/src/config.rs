//! Configuration for the watch loop.

use startguard_types::Decision;
use std::time::Duration;

/// Configuration for the watch loop.
///
/// Read once at startup; the loop never reloads it.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// How often to re-scan the store.
    pub poll_interval: Duration,
    /// How long to wait for the operator before applying
    /// `timeout_decision`. `None` waits indefinitely.
    pub prompt_timeout: Option<Duration>,
    /// Decision applied when a prompt times out. Defaults to `Deny`: an
    /// unattended machine fails closed on unrecognized entries.
    pub timeout_decision: Decision,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(5000),
            prompt_timeout: None,
            timeout_decision: Decision::Deny,
        }
    }
}
