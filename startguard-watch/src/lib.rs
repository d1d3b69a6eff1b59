//! Change-detection and review loop for Startguard.
//!
//! The watcher polls the store on a fixed interval, diffs successive
//! snapshots of the entry names, and routes every newly added name through
//! the operator: a transient notification first, then a blocking
//! allow/deny prompt. Denied entries are deleted from the store.
//!
//! # Components
//!
//! - **Differ**: pure set difference between two snapshots
//! - **NotificationSink** / **ApprovalPrompt**: trait collaborators the
//!   host process provides (console, desktop toast, test doubles)
//! - **WatchLoop**: the orchestrator owning the previous snapshot and the
//!   cycle state machine
//!
//! # Cycle
//!
//! `Idle → Scanning → Diffing → Reviewing(n) → Idle`. At most one cycle is
//! active at a time; timer ticks that fire mid-cycle are coalesced, not
//! queued. The only suspension point is the approval prompt, and shutdown
//! cancels a pending prompt without committing the partial cycle.

mod config;
mod differ;
mod error;
mod notify;
mod prompt;
mod watcher;

pub use config::WatchConfig;
pub use differ::diff;
pub use error::{WatchError, WatchResult};
pub use notify::{Notification, NotificationSink, Urgency};
pub use prompt::ApprovalPrompt;
pub use watcher::{shutdown_channel, CycleOutcome, WatchLoop, WatchState};

/// Test doubles for the collaborator traits.
pub mod mock {
    pub use crate::notify::mock::RecordingSink;
    pub use crate::prompt::mock::{HangingPrompt, ScriptedPrompt};
}
