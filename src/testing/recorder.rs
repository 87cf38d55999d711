//! Recording runtime: an in-process stand-in for the browser.
//!
//! [`RecordingRenderer`] implements [`Renderer`] and hands out
//! [`RecordingHandle`]s. Everything they are asked to do is written to a
//! shared [`Recorder`], which tests inspect and use to simulate the user
//! (clicking a bound name, closing the window).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use crate::runtime::{
    BindError, Callback, ClosedSignal, LaunchError, LaunchRequest, Renderer, UiHandle,
};

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RecorderState {
    launches: Vec<LaunchRequest>,
    bound: Vec<(String, Callback)>,
    evals: Vec<String>,
    close_count: usize,
}

/// Shared log of every runtime interaction.
///
/// One recorder models one browser window: all handles launched from the
/// same renderer share its close signal.
pub struct Recorder {
    state: Mutex<RecorderState>,
    closed: watch::Sender<bool>,
}

impl Recorder {
    fn new() -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            state: Mutex::new(RecorderState::default()),
            closed,
        }
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every launch request, oldest first.
    pub fn launches(&self) -> Vec<LaunchRequest> {
        self.lock().launches.clone()
    }

    pub fn last_launch(&self) -> Option<LaunchRequest> {
        self.lock().launches.last().cloned()
    }

    /// Names accepted by `bind`, in order.
    pub fn bound_names(&self) -> Vec<String> {
        self.lock().bound.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Every evaluated script, in order.
    pub fn evals(&self) -> Vec<String> {
        self.lock().evals.clone()
    }

    /// How many times `UiHandle::close` was called.
    pub fn close_count(&self) -> usize {
        self.lock().close_count
    }

    /// Call the page-global function `name` the way the browser would: on a
    /// thread of its own. Returns `false` when nothing is bound under `name`
    /// or the callback panicked.
    pub fn invoke(&self, name: &str) -> bool {
        let callback = self
            .lock()
            .bound
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, callback)| Arc::clone(callback));
        let Some(callback) = callback else {
            debug!(name, "invoke of unbound name");
            return false;
        };
        std::thread::spawn(move || callback()).join().is_ok()
    }

    /// Simulate the user closing the window.
    pub fn close_window(&self) {
        self.closed.send_replace(true);
    }

    pub fn is_window_closed(&self) -> bool {
        *self.closed.borrow()
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Recorder")
            .field("launches", &state.launches.len())
            .field("bound", &state.bound.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("evals", &state.evals.len())
            .field("close_count", &state.close_count)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RecordingHandle
// ---------------------------------------------------------------------------

/// A live session that only records.
#[derive(Debug)]
pub struct RecordingHandle {
    recorder: Arc<Recorder>,
    rejected: Vec<String>,
}

impl UiHandle for RecordingHandle {
    fn bind(&self, name: &str, callback: Callback) -> Result<(), BindError> {
        let reason = if self.rejected.iter().any(|r| r == name) {
            Some("rejected by runtime")
        } else if self.recorder.lock().bound.iter().any(|(n, _)| n == name) {
            Some("already bound")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(BindError {
                name: name.to_owned(),
                reason: reason.to_owned(),
            });
        }
        self.recorder.lock().bound.push((name.to_owned(), callback));
        Ok(())
    }

    fn eval(&self, script: &str) {
        self.recorder.lock().evals.push(script.to_owned());
    }

    fn closed(&self) -> ClosedSignal {
        ClosedSignal::subscribe(&self.recorder.closed)
    }

    fn close(&self) {
        self.recorder.lock().close_count += 1;
        self.recorder.closed.send_replace(true);
    }
}

// ---------------------------------------------------------------------------
// RecordingRenderer
// ---------------------------------------------------------------------------

/// A [`Renderer`] that never starts a browser.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    recorder: Arc<Recorder>,
    launch_failure: Option<String>,
    rejected: Vec<String>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            recorder: Arc::new(Recorder::new()),
            launch_failure: None,
            rejected: Vec::new(),
        }
    }

    /// A renderer whose every launch fails with `reason`.
    pub fn failing_launch(reason: impl Into<String>) -> Self {
        Self {
            launch_failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Make handles reject bindings named `name` (builder).
    pub fn rejecting(mut self, name: impl Into<String>) -> Self {
        self.rejected.push(name.into());
        self
    }

    pub fn recorder(&self) -> Arc<Recorder> {
        Arc::clone(&self.recorder)
    }

    /// A handle for an empty page, bypassing any configured launch failure.
    pub fn launch_blank(&self) -> Arc<dyn UiHandle> {
        self.recorder.lock().launches.push(LaunchRequest {
            url: crate::document::data_url(""),
            markup: String::new(),
            profile_dir: None,
            width: 0,
            height: 0,
            args: Vec::new(),
        });
        self.handle()
    }

    fn handle(&self) -> Arc<dyn UiHandle> {
        Arc::new(RecordingHandle {
            recorder: Arc::clone(&self.recorder),
            rejected: self.rejected.clone(),
        })
    }
}

impl Renderer for RecordingRenderer {
    fn launch(&self, request: LaunchRequest) -> Result<Arc<dyn UiHandle>, LaunchError> {
        if let Some(reason) = &self.launch_failure {
            return Err(LaunchError::new(reason.clone()));
        }
        if let Some(dir) = request.profile_dir.as_deref().filter(|d| d.exists()) {
            if !dir.is_dir() {
                return Err(LaunchError::new(format!(
                    "profile path {} is not a directory",
                    dir.display()
                )));
            }
        }
        debug!(width = request.width, height = request.height, "recording launch");
        self.recorder.lock().launches.push(request);
        Ok(self.handle())
    }
}
