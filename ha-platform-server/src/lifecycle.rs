//! Process lifecycle: Starting -> Ready -> Draining -> Terminated
//!
//! The phase lives in a watch channel so any task can observe it. Phases
//! only move forward; there is no way back to `Ready`.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Starting,
    Ready,
    Draining,
    Terminated,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Starting => "starting",
            Phase::Ready => "ready",
            Phase::Draining => "draining",
            Phase::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Shared handle to the current phase
#[derive(Clone, Debug)]
pub struct Lifecycle {
    sender: Arc<watch::Sender<Phase>>,
}

impl Lifecycle {
    /// Create a lifecycle in `Starting`
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Phase::Starting);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn phase(&self) -> Phase {
        *self.sender.borrow()
    }

    /// Move to `next` if it is later than the current phase.
    ///
    /// Returns false (and changes nothing) for repeated or backward moves.
    pub fn advance(&self, next: Phase) -> bool {
        let mut from = Phase::Starting;
        let moved = self.sender.send_if_modified(|current| {
            from = *current;
            if next > *current {
                *current = next;
                true
            } else {
                false
            }
        });

        if moved {
            tracing::info!(from = %from, to = %next, "lifecycle transition");
        } else {
            tracing::warn!(current = %from, requested = %next, "ignored lifecycle transition");
        }
        moved
    }

    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.sender.subscribe()
    }

    /// Wait until the lifecycle reaches `phase` or a later one.
    pub async fn wait_for(&self, phase: Phase) {
        let mut rx = self.subscribe();
        // The sender lives in self, so the channel cannot close here
        let _ = rx.wait_for(|current| *current >= phase).await;
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
