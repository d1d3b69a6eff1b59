//! The operator approval prompt.

use crate::error::WatchResult;
use async_trait::async_trait;
use startguard_types::{Decision, EntryName};

/// Asks the operator whether a newly detected entry may stay.
///
/// `ask` is the loop's only suspension point: the cycle parks in
/// `Reviewing` until the future resolves. Implementations must resolve
/// with [`WatchError::PromptClosed`](crate::WatchError::PromptClosed)
/// when their UI goes away, so the loop can abandon the cycle instead of
/// hanging on a prompt nobody will answer.
#[async_trait]
pub trait ApprovalPrompt: Send + Sync {
    /// Returns the operator's verdict on one entry.
    async fn ask(&self, name: &EntryName) -> WatchResult<Decision>;
}

pub(crate) mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// An [`ApprovalPrompt`] answering from a per-name script.
    ///
    /// Names without a scripted decision get the default (`Allow`).
    /// Every ask is recorded.
    #[derive(Debug)]
    pub struct ScriptedPrompt {
        decisions: Mutex<BTreeMap<EntryName, Decision>>,
        default: Decision,
        asks: Mutex<Vec<EntryName>>,
    }

    impl ScriptedPrompt {
        /// Creates a prompt that answers `default` for unscripted names.
        pub fn new(default: Decision) -> Self {
            Self {
                decisions: Mutex::new(BTreeMap::new()),
                default,
                asks: Mutex::new(Vec::new()),
            }
        }

        /// Scripts the decision for one name.
        pub fn decide(&self, name: &str, decision: Decision) {
            self.decisions
                .lock()
                .unwrap()
                .insert(EntryName::new(name).unwrap(), decision);
        }

        /// Returns every name asked about, in ask order.
        pub fn asks(&self) -> Vec<EntryName> {
            self.asks.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ApprovalPrompt for ScriptedPrompt {
        async fn ask(&self, name: &EntryName) -> WatchResult<Decision> {
            self.asks.lock().unwrap().push(name.clone());
            let decision = self
                .decisions
                .lock()
                .unwrap()
                .get(name)
                .copied()
                .unwrap_or(self.default);
            Ok(decision)
        }
    }

    /// An [`ApprovalPrompt`] that never answers.
    ///
    /// Optionally fires a shutdown signal the moment it is asked, for
    /// testing cancellation mid-review.
    #[derive(Debug, Default)]
    pub struct HangingPrompt {
        trigger: Option<tokio::sync::watch::Sender<bool>>,
    }

    impl HangingPrompt {
        /// A prompt that pends forever.
        pub fn new() -> Self {
            Self::default()
        }

        /// A prompt that sends `true` on the channel when asked, then
        /// pends forever.
        pub fn with_trigger(trigger: tokio::sync::watch::Sender<bool>) -> Self {
            Self {
                trigger: Some(trigger),
            }
        }
    }

    #[async_trait]
    impl ApprovalPrompt for HangingPrompt {
        async fn ask(&self, _name: &EntryName) -> WatchResult<Decision> {
            if let Some(trigger) = &self.trigger {
                let _ = trigger.send(true);
            }
            std::future::pending().await
        }
    }
}
