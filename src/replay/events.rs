//! Replay change notifications
//!
//! The engine publishes an event after every successful transition instead
//! of exposing reactive bindings; observers subscribe for a receiver and
//! pull derived state (piece positions, ledger contents) from the engine on
//! demand. Boundary no-ops publish nothing.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Notification of one completed replay transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayEvent {
    /// A move was applied; `ply` is its index and `captured` whether the
    /// destination's occupant went to the ledger.
    Advanced { ply: usize, captured: bool },
    /// A move was reverted; `ply` is the new current ply (`None` when back
    /// at the initial position) and `restored` whether a captured piece was
    /// reinstated.
    Retreated { ply: Option<usize>, restored: bool },
}

/// Fan-out of replay events to any number of subscribers.
///
/// Subscribers that dropped their receiver are pruned on the next publish.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    senders: Vec<Sender<ReplayEvent>>,
}

impl EventBus {
    pub fn subscribe(&mut self) -> Receiver<ReplayEvent> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    pub fn publish(&mut self, event: ReplayEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }
}
