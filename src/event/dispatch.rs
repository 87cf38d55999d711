//! Event dispatch loop: multiplexes signals, clock ticks and window close.
//!
//! The loop is the only place where application state changes and the only
//! caller of [`UiHandle::eval`] during a session. Callbacks bound on the
//! runtime side just push signals (see [`super::signal`]); everything they
//! trigger happens here, one event per iteration.

use std::future::pending;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{StreamExt, StreamMap};
use tracing::{debug, info};

use super::signal::SignalSource;
use crate::error::WindowError;
use crate::runtime::{ClosedSignal, UiHandle};
use crate::window::Window;

/// Default clock tick period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// Loop-local application state and its reactions.
///
/// The loop owns the value for the whole session and hands it back when the
/// window closes. Handlers run one at a time and may call `ui.eval`.
pub trait Application {
    /// Payload carried by signals.
    type Signal: Send + 'static;

    /// A bound callback fired on `source`.
    fn on_signal(&mut self, source: &str, signal: Self::Signal, ui: &dyn UiHandle);

    /// The clock ticked.
    fn on_tick(&mut self, _now: DateTime<Local>, _ui: &dyn UiHandle) {}

    /// The user closed the window. Runs once, right before the loop returns.
    fn on_closed(&mut self) {}
}

// ---------------------------------------------------------------------------
// LoopEvent
// ---------------------------------------------------------------------------

/// One unit of work for the loop.
#[derive(Debug)]
pub enum LoopEvent<M> {
    Signal { source: String, signal: M },
    Tick(DateTime<Local>),
    Closed,
}

// ---------------------------------------------------------------------------
// EventLoop
// ---------------------------------------------------------------------------

/// Single-threaded consumer of signals, ticks and the close signal.
///
/// When several inputs are ready at once, signals win over ticks and ticks
/// win over close, so queued clicks are still handled before shutdown.
pub struct EventLoop<M> {
    ui: Arc<dyn UiHandle>,
    closed: ClosedSignal,
    sources: StreamMap<String, ReceiverStream<M>>,
    tick_interval: Option<Duration>,
}

impl<M: Send + 'static> EventLoop<M> {
    /// Create a loop around a live handle with the default tick period.
    pub fn new(ui: Arc<dyn UiHandle>) -> Self {
        let closed = ui.closed();
        Self {
            ui,
            closed,
            sources: StreamMap::new(),
            tick_interval: Some(DEFAULT_TICK_INTERVAL),
        }
    }

    /// Create a loop for a started window, using its configured tick period.
    pub fn for_window(window: &Window) -> Result<Self, WindowError> {
        let ui = window.ui().ok_or(WindowError::InvalidState {
            operation: "run an event loop for",
            state: window.state(),
        })?;
        Ok(Self::new(ui).with_tick_interval(window.config().tick_interval()))
    }

    /// Add a signal source (builder). A later source with the same name
    /// replaces the earlier one.
    pub fn with_source(mut self, source: SignalSource<M>) -> Self {
        let (name, rx) = source.into_parts();
        self.sources.insert(name.to_string(), ReceiverStream::new(rx));
        self
    }

    /// Set the tick period (builder). A zero period disables ticks.
    pub fn with_tick_interval(mut self, period: Duration) -> Self {
        self.tick_interval = (!period.is_zero()).then_some(period);
        self
    }

    /// Disable clock ticks (builder).
    pub fn without_ticks(mut self) -> Self {
        self.tick_interval = None;
        self
    }

    /// Number of registered signal sources still open.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Run until the window closes, returning the final application state.
    ///
    /// The first tick fires one full period after the loop starts. The timer
    /// is dropped on return; releasing the handle is the caller's job
    /// (`Window::close`, or dropping the window).
    pub async fn run<A>(mut self, mut app: A) -> A
    where
        A: Application<Signal = M>,
    {
        let mut ticker = self.tick_interval.map(|period| {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        info!(sources = self.sources.len(), "event loop started");

        loop {
            let event = self.next_event(&mut ticker).await;
            match event {
                LoopEvent::Signal { source, signal } => {
                    debug!(%source, "dispatching signal");
                    app.on_signal(&source, signal, self.ui.as_ref());
                }
                LoopEvent::Tick(now) => {
                    debug!("dispatching tick");
                    app.on_tick(now, self.ui.as_ref());
                }
                LoopEvent::Closed => {
                    info!("window closed, leaving event loop");
                    app.on_closed();
                    return app;
                }
            }
        }
    }

    /// Wait for whichever input becomes ready first.
    async fn next_event(&mut self, ticker: &mut Option<Interval>) -> LoopEvent<M> {
        let has_sources = !self.sources.is_empty();
        tokio::select! {
            biased;
            Some((source, signal)) = self.sources.next(), if has_sources => {
                LoopEvent::Signal { source, signal }
            }
            _ = next_tick(ticker) => LoopEvent::Tick(Local::now()),
            _ = self.closed.wait() => LoopEvent::Closed,
        }
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => pending::<()>().await,
    }
}

impl<M> std::fmt::Debug for EventLoop<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLoop")
            .field("sources", &self.sources.keys().collect::<Vec<_>>())
            .field("tick_interval", &self.tick_interval)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
