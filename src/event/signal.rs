//! Signal channels: the hand-off from bound callbacks to the dispatch loop.
//!
//! Each event source gets its own bounded `mpsc` channel. The sending half
//! turns into binding callbacks that only ever `try_send`: they never block
//! the runtime's callback thread and never touch the UI themselves. When the
//! buffer is full the signal is dropped and a warning is logged.

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{trace, warn};

use crate::runtime::Callback;

/// Default per-source buffer depth.
pub const DEFAULT_SIGNAL_BUFFER: usize = 16;

/// Create a signal channel for `source` with [`DEFAULT_SIGNAL_BUFFER`] slots.
pub fn channel<M>(source: impl Into<String>) -> (SignalSender<M>, SignalSource<M>) {
    channel_with_capacity(source, DEFAULT_SIGNAL_BUFFER)
}

/// Create a signal channel with an explicit buffer depth (at least 1).
pub fn channel_with_capacity<M>(
    source: impl Into<String>,
    capacity: usize,
) -> (SignalSender<M>, SignalSource<M>) {
    let source: Arc<str> = Arc::from(source.into());
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        SignalSender {
            source: Arc::clone(&source),
            tx,
        },
        SignalSource { source, rx },
    )
}

// ---------------------------------------------------------------------------
// SignalSender
// ---------------------------------------------------------------------------

/// Producer half of a signal channel. Cheap to clone.
#[derive(Debug)]
pub struct SignalSender<M> {
    source: Arc<str>,
    tx: mpsc::Sender<M>,
}

impl<M> Clone for SignalSender<M> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            tx: self.tx.clone(),
        }
    }
}

impl<M: Send + 'static> SignalSender<M> {
    /// Name of the event source this sender feeds.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Push one signal without waiting. Returns whether it was queued.
    pub fn signal(&self, message: M) -> bool {
        match self.tx.try_send(message) {
            Ok(()) => {
                trace!(source = %self.source, "signal queued");
                true
            }
            Err(TrySendError::Full(_)) => {
                warn!(source = %self.source, "signal buffer full, dropping signal");
                false
            }
            Err(TrySendError::Closed(_)) => {
                trace!(source = %self.source, "dispatch loop gone, dropping signal");
                false
            }
        }
    }

    /// A binding callback that pushes a clone of `message` on every call.
    pub fn callback(&self, message: M) -> Callback
    where
        M: Clone + Sync,
    {
        let sender = self.clone();
        Arc::new(move || {
            sender.signal(message.clone());
        })
    }
}

// ---------------------------------------------------------------------------
// SignalSource
// ---------------------------------------------------------------------------

/// Consumer half of a signal channel, handed to the dispatch loop.
#[derive(Debug)]
pub struct SignalSource<M> {
    source: Arc<str>,
    rx: mpsc::Receiver<M>,
}

impl<M> SignalSource<M> {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Take a pending signal without waiting.
    pub fn try_recv(&mut self) -> Option<M> {
        self.rx.try_recv().ok()
    }

    /// Split into the source name and the raw receiver.
    pub fn into_parts(self) -> (Arc<str>, mpsc::Receiver<M>) {
        (self.source, self.rx)
    }
}
