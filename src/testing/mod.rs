//! Headless testing support: a recording stand-in for the browser runtime.
//!
//! Drive a [`Window`](crate::window::Window) with [`RecordingRenderer`], then
//! inspect launches, bindings and evaluated scripts through its [`Recorder`].

pub mod recorder;

pub use recorder::{Recorder, RecordingHandle, RecordingRenderer};
