//! Callback bindings, signal channels and the dispatch loop.

pub mod binding;
pub mod dispatch;
pub mod signal;

pub use binding::{Binding, BindingTable};
pub use dispatch::{Application, EventLoop, LoopEvent, DEFAULT_TICK_INTERVAL};
pub use signal::{SignalSender, SignalSource, DEFAULT_SIGNAL_BUFFER};
