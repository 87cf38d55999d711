//! # dali
//!
//! Declarative HTML composition over an embedded browser runtime.
//!
//! Build a page out of typed nodes, bind host callbacks to names the page can
//! call, launch it through a [`runtime::Renderer`], and react to clicks and
//! clock ticks from a single-threaded dispatch loop that drives the live page
//! with small script snippets.
//!
//! ## Core Systems
//!
//! - **[`style`]**: inline style sets and their declaration lexer
//! - **[`dom`]**: the `Element` trait, the closed `Node` enum, ordered sequences
//! - **[`elements`]**: Container, Button, Text, Heading, Canvas, Script, Title, links
//! - **[`window`]**: configuration and the Built → Started → Closed lifecycle
//! - **[`event`]**: binding table, signal channels, dispatch loop
//! - **[`runtime`]**: the boundary traits a browser backend implements
//! - **[`script`]**: JavaScript statements for `UiHandle::eval`
//! - **[`testing`]**: a recording runtime for headless tests
//!
//! ## Example
//!
//! ```ignore
//! use dali::prelude::*;
//!
//! let (clicks, source) = dali::event::signal::channel::<bool>("ButtonOne");
//! let mut window = Window::new(WindowConfig::new().with_title("Counter"));
//! window.add(Heading::new("Clicks: 0").with_id("heading"))?;
//! window.add(Button::new("Click").with_on_click("ButtonOne"))?;
//! window.bind_signal("ButtonOne", &clicks, true)?;
//! window.start(&renderer)?;
//! let app = EventLoop::for_window(&window)?.with_source(source).run(Counter::default()).await;
//! window.close();
//! ```

extern crate self as dali;

// Markup
pub mod document;
pub mod dom;
pub mod elements;
pub mod style;

// Session
pub mod error;
pub mod event;
pub mod runtime;
pub mod script;
pub mod validate;
pub mod window;

// Headless runtime
pub mod testing;

pub use error::WindowError;
pub use window::{Window, WindowConfig, WindowState};

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::dom::{Element, ElementExt, Node, NodeSequence};
    pub use crate::elements::{
        Button, Canvas, Container, Heading, LineBreak, Script, StyleSheetLink, Text, Title,
    };
    pub use crate::event::{Application, EventLoop};
    pub use crate::runtime::{Renderer, UiHandle};
    pub use crate::style::StyleSet;
    pub use crate::window::{Window, WindowConfig};
    pub use crate::WindowError;
}

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use dali_macros::view;
