//! The watch loop orchestrator.
//!
//! Owns the previous snapshot and drives scan → diff → review cycles on a
//! fixed timer. All store failures are converted to log events here; the
//! loop survives transient store unavailability and stops only on
//! shutdown.

use crate::config::WatchConfig;
use crate::differ::diff;
use crate::error::{WatchError, WatchResult};
use crate::notify::{Notification, NotificationSink};
use crate::prompt::ApprovalPrompt;
use startguard_store::StoreAdapter;
use startguard_types::{Decision, EntryName, Snapshot};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Where the loop currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Waiting for the next scheduled tick.
    Idle,
    /// Listing the store.
    Scanning,
    /// Computing the change set.
    Diffing,
    /// Reviewing `n` pending new entries with the operator.
    Reviewing(usize),
}

/// What one cycle did. Returned by [`WatchLoop::run_cycle`] so hosts and
/// tests can observe the loop without scraping logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// First successful scan; baseline recorded, nothing reviewed.
    Baseline,
    /// Every scope was unreadable; previous snapshot retained.
    ScanFailed,
    /// Scan succeeded and nothing new appeared.
    NoChanges,
    /// New entries were reviewed.
    Reviewed {
        /// How many new names were put to the operator.
        reviewed: usize,
        /// How many of those the store confirmed removed.
        removed: usize,
    },
}

/// The watcher: exactly one previous snapshot, exactly one active cycle.
///
/// Single-task by construction — [`run`](Self::run) drives cycles
/// sequentially off one timer, so the at-most-one-cycle invariant needs no
/// locking. Ticks that fire while a cycle is still reviewing are skipped,
/// not queued.
pub struct WatchLoop {
    store: Arc<dyn StoreAdapter>,
    sink: Arc<dyn NotificationSink>,
    prompt: Arc<dyn ApprovalPrompt>,
    config: WatchConfig,
    shutdown: watch::Receiver<bool>,
    previous: Snapshot,
    state: WatchState,
    baseline_taken: bool,
    degraded: bool,
}

impl WatchLoop {
    /// Creates a watcher. `shutdown` flips to `true` (or closes) to stop
    /// the loop; see [`shutdown_channel`].
    pub fn new(
        store: Arc<dyn StoreAdapter>,
        sink: Arc<dyn NotificationSink>,
        prompt: Arc<dyn ApprovalPrompt>,
        config: WatchConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            store,
            sink,
            prompt,
            config,
            shutdown,
            previous: Snapshot::new(),
            state: WatchState::Idle,
            baseline_taken: false,
            degraded: false,
        }
    }

    /// The snapshot committed by the last completed cycle.
    #[must_use]
    pub fn previous(&self) -> &Snapshot {
        &self.previous
    }

    /// Current position in the cycle state machine.
    #[must_use]
    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Runs cycles on the configured interval until shutdown.
    ///
    /// Store failures never end the loop; only the shutdown signal does.
    pub async fn run(mut self) -> WatchResult<()> {
        let mut ticker = tokio::time::interval(self.config.poll_interval);
        // A tick that fires while a review is blocked on the operator is
        // coalesced into the next one, never queued behind it.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Watching autostart entries (interval {:?})",
            self.config.poll_interval
        );

        loop {
            let mut shutdown = self.shutdown.clone();
            tokio::select! {
                _ = ticker.tick() => {
                    match self.run_cycle().await {
                        Ok(outcome) => debug!("Cycle finished: {:?}", outcome),
                        Err(WatchError::Shutdown) => {
                            info!("Watcher stopped during review");
                            return Ok(());
                        }
                        Err(WatchError::PromptClosed) => {
                            warn!("Approval prompt closed; stopping watcher");
                            return Err(WatchError::PromptClosed);
                        }
                        // run_cycle absorbs store errors itself.
                        Err(e) => warn!("Cycle error: {}", e),
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Watcher stopped");
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs one scan → diff → review cycle.
    ///
    /// Public so hosts and tests can drive cycles without the timer. The
    /// previous snapshot is replaced only when the cycle completes; a
    /// failed scan or a shutdown mid-review leaves it untouched.
    pub async fn run_cycle(&mut self) -> WatchResult<CycleOutcome> {
        if *self.shutdown.borrow() {
            return Err(WatchError::Shutdown);
        }

        self.state = WatchState::Scanning;
        let current = match self.store.list().await {
            Ok(snapshot) => {
                if self.degraded {
                    info!("Store readable again; resuming normal detection");
                    self.degraded = false;
                }
                snapshot
            }
            Err(e) => {
                warn!("Scan failed, keeping previous snapshot: {}", e);
                if !self.degraded {
                    // Alert once per degradation episode; console logs
                    // alone leave the operator uninformed.
                    self.degraded = true;
                    self.sink.notify(&Notification::store_degraded()).await;
                }
                self.state = WatchState::Idle;
                return Ok(CycleOutcome::ScanFailed);
            }
        };

        if !self.baseline_taken {
            info!("Baseline recorded: {} existing entries", current.len());
            self.baseline_taken = true;
            self.previous = current;
            self.state = WatchState::Idle;
            return Ok(CycleOutcome::Baseline);
        }

        self.state = WatchState::Diffing;
        let changes = diff(&self.previous, &current);
        if changes.is_empty() {
            self.previous = current;
            self.state = WatchState::Idle;
            return Ok(CycleOutcome::NoChanges);
        }

        info!("Detected {} new autostart entries", changes.len());
        self.state = WatchState::Reviewing(changes.len());

        let mut shutdown = self.shutdown.clone();
        let mut removed = Vec::new();
        for name in changes.iter() {
            self.sink.notify(&Notification::new_entry(name)).await;

            let decision = tokio::select! {
                decision = self.decide(name) => decision?,
                _ = shutdown.changed() => {
                    info!("Shutdown during review; cycle abandoned uncommitted");
                    self.state = WatchState::Idle;
                    return Err(WatchError::Shutdown);
                }
            };

            match decision {
                Decision::Allow => {
                    info!("Entry '{}' allowed by operator", name);
                }
                Decision::Deny => match self.store.delete(name).await {
                    Ok(true) => {
                        info!("Entry '{}' denied and removed", name);
                        removed.push(name.clone());
                    }
                    Ok(false) => {
                        // Gone already (another actor beat us to it).
                        info!("Entry '{}' denied but already absent", name);
                        removed.push(name.clone());
                    }
                    Err(e) => {
                        // Keep the name in the committed snapshot so it
                        // stays known instead of re-flagging as new.
                        warn!("Entry '{}' denied but removal failed: {}", name, e);
                    }
                },
            }
        }

        // Commit current minus the store-confirmed removals. Equivalent to
        // a post-delete re-read while the store has no other writer.
        let reviewed = changes.len();
        self.previous = current.without(removed.iter());
        self.state = WatchState::Idle;
        Ok(CycleOutcome::Reviewed {
            reviewed,
            removed: removed.len(),
        })
    }

    /// Asks the prompt, applying the configured timeout decision if the
    /// operator stays silent too long.
    async fn decide(&self, name: &EntryName) -> WatchResult<Decision> {
        match self.config.prompt_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.prompt.ask(name)).await {
                Ok(decision) => decision,
                Err(_) => {
                    warn!(
                        "No decision for '{}' within {:?}; applying {}",
                        name, limit, self.config.timeout_decision
                    );
                    Ok(self.config.timeout_decision)
                }
            },
            None => self.prompt.ask(name).await,
        }
    }
}

/// Creates the shutdown signal pair for a [`WatchLoop`].
#[must_use]
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}
