//! Integration tests for dali.
//!
//! These exercise the public API from outside the crate: composing a page,
//! starting a window against the recording runtime, and driving it from the
//! dispatch loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use dali::event::signal;
use dali::prelude::*;
use dali::script;
use dali::testing::RecordingRenderer;
use dali::validate::Diagnostic;
use dali::WindowState;
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Page composition
// ---------------------------------------------------------------------------

fn tabs() -> Container {
    Container::new()
        .with_id("tabs")
        .with_style(StyleSet::parse("border:1px solid #000088; position:relative").unwrap())
        .with_child(Button::new("Page One").with_on_click("showPageOne"))
        .with_child(Button::new("Page Two").with_on_click("showPageTwo"))
        .with_child(Text::new("The Clock Says:").with_id("clock"))
}

fn page_one() -> Container {
    Container::new()
        .with_id("pageOne")
        .with_child(Heading::new("Clicks: 0").with_id("heading"))
        .with_child(LineBreak::new())
        .with_child(Canvas::sized(600, 400).with_id("whiteboard"))
        .with_child(Button::new("I Count Clicks").with_id("button1").with_on_click("doButtonOne"))
}

#[test]
fn test_page_markup_snapshot() {
    let body = NodeSequence::new().with(tabs()).with(page_one());
    insta::assert_snapshot!(body.render(), @r#"<div id="tabs" style="border:1px solid #000088;position:relative;"><button onclick="showPageOne()">Page One</button><button onclick="showPageTwo()">Page Two</button><span id="clock">The Clock Says:</span></div><div id="pageOne"><h1 id="heading">Clicks: 0</h1><br/><canvas id="whiteboard" width="600" height="400"></canvas><button id="button1" onclick="doButtonOne()">I Count Clicks</button></div>"#);
}

#[test]
fn test_ids_are_addressable() {
    let body = NodeSequence::new().with(tabs()).with(page_one());
    assert_eq!(
        body.ids(),
        vec!["tabs", "clock", "pageOne", "heading", "whiteboard", "button1"]
    );
    assert_eq!(body.find_by_id("whiteboard").map(Element::tag), Some("canvas"));
    assert!(body.find_by_id("missing").is_none());
}

#[test]
fn test_window_document_shape() {
    let mut window = Window::new(
        WindowConfig::new()
            .with_title("Dali Whiteboard")
            .with_stylesheet("board.css"),
    );
    window.add_head(Script::new("function initialDisplay(){}")).unwrap();
    window.add(Text::new("hi")).unwrap();
    insta::assert_snapshot!(window.render(), @r#"<!DOCTYPE html><html><head><title>Dali Whiteboard</title><link rel="stylesheet" href="board.css"><script>function initialDisplay(){}</script></head><body><span>hi</span></body></html>"#);
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_validation_blocks_duplicate_ids() {
    let renderer = RecordingRenderer::new();
    let mut window = Window::new(WindowConfig::default());
    window.add(page_one()).unwrap();
    window.add(Heading::new("again").with_id("heading")).unwrap();

    let report = window.validate();
    assert!(report.has_errors());
    assert!(report.iter().any(|d| matches!(d, Diagnostic::DuplicateId { id, .. } if id == "heading")));
    // doButtonOne is not bound yet
    assert!(report
        .warnings()
        .any(|d| matches!(d, Diagnostic::InertBinding { callback, .. } if callback == "doButtonOne")));

    assert!(matches!(
        window.start(&renderer),
        Err(WindowError::Validation(_))
    ));
    assert_eq!(window.state(), WindowState::Built);
}

#[test]
fn test_close_before_start_is_noop() {
    let mut window = Window::new(WindowConfig::default());
    window.close();
    window.close();
    assert_eq!(window.state(), WindowState::Built);
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Count,
    Line,
    ShowPageTwo,
}

#[derive(Debug, Default)]
struct Board {
    clicks: u32,
    lines: u32,
    ticks: u32,
    closed: bool,
}

impl Application for Board {
    type Signal = Action;

    fn on_signal(&mut self, _source: &str, action: Action, ui: &dyn UiHandle) {
        match action {
            Action::Count => {
                self.clicks += 1;
                ui.eval(&script::set_inner_html("heading", &format!("Clicks: {}", self.clicks)));
            }
            Action::Line => {
                self.lines += 1;
                ui.eval(&script::draw_line("whiteboard", (0.0, 0.0), (10.0, 10.0)));
            }
            Action::ShowPageTwo => {
                ui.eval(&script::hide("pageOne"));
                ui.eval(&script::show("pageTwo"));
            }
        }
    }

    fn on_tick(&mut self, now: DateTime<Local>, ui: &dyn UiHandle) {
        self.ticks += 1;
        ui.eval(&script::set_inner_html("clock", &script::format_clock(&now)));
    }

    fn on_closed(&mut self) {
        self.closed = true;
    }
}

#[tokio::test(start_paused = true)]
async fn test_whiteboard_session() {
    let renderer = RecordingRenderer::new();
    let recorder = renderer.recorder();
    let (buttons, source) = signal::channel::<Action>("buttons");

    let mut window = Window::new(WindowConfig::new().with_title("Whiteboard"));
    window.add(tabs()).unwrap();
    window.add(page_one()).unwrap();
    window.bind_signal("doButtonOne", &buttons, Action::Count).unwrap();
    window.bind_signal("doButtonTwo", &buttons, Action::Line).unwrap();
    window.bind_signal("showPageTwo", &buttons, Action::ShowPageTwo).unwrap();
    window.bind("showPageOne", || {}).unwrap();
    window.start(&renderer).unwrap();

    assert_eq!(
        recorder.bound_names(),
        vec!["doButtonOne", "doButtonTwo", "showPageTwo", "showPageOne"]
    );

    for name in ["doButtonOne", "doButtonOne", "doButtonOne", "doButtonTwo"] {
        assert!(recorder.invoke(name));
    }
    // Clicks only queue signals; nothing reaches the page before the loop runs.
    assert!(recorder.evals().is_empty());

    let closer = Arc::clone(&recorder);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(1500)).await;
        closer.close_window();
    });

    let board = EventLoop::for_window(&window)
        .unwrap()
        .with_source(source)
        .run(Board::default())
        .await;
    window.close();

    assert_eq!(board.clicks, 3);
    assert_eq!(board.lines, 1);
    assert_eq!(board.ticks, 1);
    assert!(board.closed);
    assert_eq!(recorder.close_count(), 1);
    assert_eq!(window.state(), WindowState::Closed);

    let evals = recorder.evals();
    assert_eq!(evals.len(), 5);
    assert_eq!(
        evals[2],
        r#"document.getElementById("heading").innerHTML="Clicks: 3";"#
    );
    assert!(evals[3].contains("lineTo(10.00,10.00)"));
    assert!(evals[4].starts_with(r#"document.getElementById("clock").innerHTML="#));
}

#[tokio::test(start_paused = true)]
async fn test_event_loop_requires_started_window() {
    let window = Window::new(WindowConfig::default());
    let err = EventLoop::<Action>::for_window(&window).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot run an event loop for a window that is built"
    );
}

#[tokio::test(start_paused = true)]
async fn test_config_tick_interval_is_used() {
    let renderer = RecordingRenderer::new();
    let recorder = renderer.recorder();
    let mut window =
        Window::new(WindowConfig::new().with_tick_interval(Duration::from_millis(200)));
    window.start(&renderer).unwrap();

    let closer = Arc::clone(&recorder);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(1100)).await;
        closer.close_window();
    });

    let board = EventLoop::<Action>::for_window(&window)
        .unwrap()
        .run(Board::default())
        .await;
    assert_eq!(board.ticks, 5);
}

// ---------------------------------------------------------------------------
// view! macro
// ---------------------------------------------------------------------------

#[cfg(feature = "macros")]
#[test]
fn test_view_macro_builds_sequence() {
    let nodes = dali::view! {
        <Heading text="Clicks: 0" id="heading" />
        <Container id="pageOne" style="display:none">
            <Canvas id="whiteboard" width=600 height=400 />
            <Button label="I Count Clicks" on_click="doButtonOne" />
        </Container>
    };
    assert_eq!(nodes.len(), 2);
    insta::assert_snapshot!(nodes.render(), @r#"<h1 id="heading">Clicks: 0</h1><div id="pageOne" style="display:none;"><canvas id="whiteboard" width="600" height="400"></canvas><button onclick="doButtonOne()">I Count Clicks</button></div>"#);
}
