//! Window: configuration, node tree, bindings and the start/close lifecycle.
//!
//! A [`Window`] is assembled in the `Built` state, launched once with
//! [`Window::start`], and released with [`Window::close`] (or on drop).

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::document::Document;
use crate::dom::{Node, NodeSequence};
use crate::error::WindowError;
use crate::event::signal::SignalSender;
use crate::event::BindingTable;
use crate::runtime::{Callback, ClosedSignal, LaunchRequest, Renderer, UiHandle};
use crate::validate::{self, ValidationReport};

// ---------------------------------------------------------------------------
// WindowConfig
// ---------------------------------------------------------------------------

/// Display and runtime settings for a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Document title.
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Browser profile directory. `None` lets the runtime use a temporary one.
    pub profile_dir: Option<PathBuf>,
    /// External stylesheet URL linked from the head.
    pub stylesheet: Option<String>,
    /// Extra browser command-line arguments.
    pub args: Vec<String>,
    /// Clock tick period for the event loop. Zero disables ticks.
    pub tick_interval_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 700,
            height: 700,
            profile_dir: None,
            stylesheet: None,
            args: Vec::new(),
            tick_interval_ms: 1000,
        }
    }
}

impl WindowConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set width and height in pixels (builder).
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the browser profile directory (builder).
    pub fn with_profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = Some(dir.into());
        self
    }

    /// Link an external stylesheet (builder).
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Append a browser argument (builder).
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the clock tick period (builder). Sub-millisecond precision is dropped.
    pub fn with_tick_interval(mut self, period: Duration) -> Self {
        // A nonzero period never rounds down to the "no ticks" value.
        self.tick_interval_ms = match period.as_millis() {
            0 if !period.is_zero() => 1,
            ms => u64::try_from(ms).unwrap_or(u64::MAX),
        };
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

// ---------------------------------------------------------------------------
// WindowState
// ---------------------------------------------------------------------------

/// Lifecycle state. Transitions only go forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Built,
    Started,
    Closed,
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindowState::Built => "built",
            WindowState::Started => "started",
            WindowState::Closed => "closed",
        })
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A composed page plus the session that displays it.
pub struct Window {
    config: WindowConfig,
    head: NodeSequence,
    body: NodeSequence,
    bindings: BindingTable,
    state: WindowState,
    ui: Option<Arc<dyn UiHandle>>,
}

impl Window {
    /// Create an empty window in the `Built` state.
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            head: NodeSequence::new(),
            body: NodeSequence::new(),
            bindings: BindingTable::new(),
            state: WindowState::Built,
            ui: None,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn body(&self) -> &NodeSequence {
        &self.body
    }

    pub fn head(&self) -> &NodeSequence {
        &self.head
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    fn ensure_built(&self, operation: &'static str) -> Result<(), WindowError> {
        match self.state {
            WindowState::Built => Ok(()),
            state => Err(WindowError::InvalidState { operation, state }),
        }
    }

    // ── Building ─────────────────────────────────────────────────────

    /// Append a node to the body.
    pub fn add(&mut self, node: impl Into<Node>) -> Result<(), WindowError> {
        self.ensure_built("add nodes to")?;
        self.body.append(node);
        Ok(())
    }

    /// Append every node of a sequence to the body.
    pub fn add_all(&mut self, nodes: NodeSequence) -> Result<(), WindowError> {
        self.ensure_built("add nodes to")?;
        self.body.extend(nodes);
        Ok(())
    }

    /// Append a node to the head (scripts, links).
    pub fn add_head(&mut self, node: impl Into<Node>) -> Result<(), WindowError> {
        self.ensure_built("add head nodes to")?;
        self.head.append(node);
        Ok(())
    }

    /// Register a callback the page can call as `name()`.
    pub fn bind(
        &mut self,
        name: impl Into<String>,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Result<(), WindowError> {
        self.bind_callback(name, Arc::new(callback))
    }

    /// Register an already shared callback.
    pub fn bind_callback(
        &mut self,
        name: impl Into<String>,
        callback: Callback,
    ) -> Result<(), WindowError> {
        self.ensure_built("bind callbacks on")?;
        self.bindings.bind_callback(name, callback);
        Ok(())
    }

    /// Register `name` so that each call pushes `message` into `sender`.
    pub fn bind_signal<M>(
        &mut self,
        name: impl Into<String>,
        sender: &SignalSender<M>,
        message: M,
    ) -> Result<(), WindowError>
    where
        M: Clone + Send + Sync + 'static,
    {
        self.bind_callback(name, sender.callback(message))
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Run the pre-start validation pass without side effects.
    pub fn validate(&self) -> ValidationReport {
        validate::validate(&self.head, &self.body, &self.bindings)
    }

    fn document(&self) -> Document<'_> {
        Document::new(&self.head, &self.body)
            .with_title(self.config.title.as_deref())
            .with_stylesheet(self.config.stylesheet.as_deref())
    }

    /// Full page markup. Pure, valid in every state.
    pub fn render(&self) -> String {
        self.document().render()
    }

    /// The page as a `data:text/html,` URI.
    pub fn document_url(&self) -> String {
        self.document().to_data_url()
    }

    /// The live handle, while started.
    pub fn ui(&self) -> Option<Arc<dyn UiHandle>> {
        self.ui.clone()
    }

    /// The close signal of the live session, while started.
    pub fn closed(&self) -> Option<ClosedSignal> {
        self.ui.as_ref().map(|ui| ui.closed())
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Validate, launch the runtime and apply every binding.
    ///
    /// If a binding is rejected the window still ends up `Started` with the
    /// earlier bindings applied, and the error is returned.
    pub fn start(&mut self, renderer: &dyn Renderer) -> Result<(), WindowError> {
        self.ensure_built("start")?;

        let report = self.validate();
        for warning in report.warnings() {
            warn!(%warning, "window validation warning");
        }
        if report.has_errors() {
            return Err(WindowError::Validation(report));
        }

        let markup = self.render();
        let request = LaunchRequest {
            url: crate::document::data_url(&markup),
            markup,
            profile_dir: self.config.profile_dir.clone(),
            width: self.config.width,
            height: self.config.height,
            args: self.config.args.clone(),
        };
        debug!(width = request.width, height = request.height, "launching runtime");
        let ui = renderer.launch(request)?;
        self.ui = Some(Arc::clone(&ui));
        self.state = WindowState::Started;
        info!(bindings = self.bindings.len(), "window started");

        self.bindings.apply(ui.as_ref())?;
        Ok(())
    }

    /// Release the live handle. A no-op when nothing is held.
    pub fn close(&mut self) {
        if let Some(ui) = self.ui.take() {
            ui.close();
            self.state = WindowState::Closed;
            info!("window closed");
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("body_len", &self.body.len())
            .field("bindings", &self.bindings.names())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
