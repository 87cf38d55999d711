//! Boundary with the embedded rendering runtime.
//!
//! The browser process itself is external. A [`Renderer`] launches it with a
//! document and hands back a live [`UiHandle`], through which callbacks are
//! bound, scripts evaluated, and the window closed.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::watch;

/// Zero-argument callback invoked by the runtime, possibly from its own threads.
pub type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The runtime could not be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct LaunchError {
    pub reason: String,
}

impl LaunchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A named callback could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot bind `{name}`: {reason}")]
pub struct BindError {
    pub name: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// LaunchRequest
// ---------------------------------------------------------------------------

/// Everything the runtime needs to open a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// `data:text/html,` URI carrying the percent-encoded document.
    pub url: String,
    /// The raw document markup.
    pub markup: String,
    /// Browser profile directory. `None` lets the runtime pick a temporary one.
    pub profile_dir: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    /// Extra command-line arguments for the browser process.
    pub args: Vec<String>,
}

// ---------------------------------------------------------------------------
// ClosedSignal
// ---------------------------------------------------------------------------

/// Resolves once the user closes the window.
///
/// Built on a `watch` channel: the runtime side flips the value to `true`.
/// A dropped sender also counts as closed.
#[derive(Debug, Clone)]
pub struct ClosedSignal {
    rx: watch::Receiver<bool>,
}

impl ClosedSignal {
    /// Create a connected `(sender, signal)` pair.
    pub fn channel() -> (watch::Sender<bool>, Self) {
        let (tx, rx) = watch::channel(false);
        (tx, Self { rx })
    }

    /// Observe an existing close channel.
    pub fn subscribe(tx: &watch::Sender<bool>) -> Self {
        Self { rx: tx.subscribe() }
    }

    /// Whether the window has already been closed.
    pub fn is_closed(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Wait until the window is closed.
    pub async fn wait(&mut self) {
        // An error means the sender is gone, which is as final as a close.
        let _ = self.rx.wait_for(|closed| *closed).await;
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A live UI session.
///
/// Implementations must tolerate `eval` and `close` from any thread and make
/// `close` idempotent.
pub trait UiHandle: Send + Sync {
    /// Install `callback` as the page-global function `name`.
    fn bind(&self, name: &str, callback: Callback) -> Result<(), BindError>;

    /// Fire-and-forget script evaluation in the live page.
    fn eval(&self, script: &str);

    /// Signal that resolves when the user closes the window.
    fn closed(&self) -> ClosedSignal;

    /// Release the runtime and its process resources.
    fn close(&self);
}

/// Launches rendering runtimes.
pub trait Renderer {
    fn launch(&self, request: LaunchRequest) -> Result<Arc<dyn UiHandle>, LaunchError>;
}

impl fmt::Debug for dyn UiHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UiHandle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(LaunchError::new("no browser found").to_string(), "no browser found");
        let err = BindError {
            name: "doButtonOne".into(),
            reason: "already bound".into(),
        };
        assert_eq!(err.to_string(), "cannot bind `doButtonOne`: already bound");
    }

    #[tokio::test]
    async fn closed_signal_resolves_after_send() {
        let (tx, mut signal) = ClosedSignal::channel();
        assert!(!signal.is_closed());
        tx.send_replace(true);
        signal.wait().await;
        assert!(signal.is_closed());
    }

    #[tokio::test]
    async fn dropped_sender_counts_as_closed() {
        let (tx, mut signal) = ClosedSignal::channel();
        drop(tx);
        assert!(signal.is_closed());
        signal.wait().await;
    }
}
