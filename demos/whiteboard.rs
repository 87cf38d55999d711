//! Two-tab whiteboard page: a click counter, random line drawing, a picture,
//! and a live clock.
//!
//! There is no browser backend in this crate, so the demo runs against the
//! recording runtime and plays a short scripted session: a few clicks, a tab
//! switch, then the user closes the window. Every script the page would have
//! received is printed at the end.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example whiteboard
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use dali::event::signal;
use dali::prelude::*;
use dali::script;
use dali::testing::RecordingRenderer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PICTURE_URL: &str = "http://cdn.dumpaday.com/wp-content/uploads/2020/06/00-57-750x280.jpg";
const BOARD_WIDTH: u32 = 600;
const BOARD_HEIGHT: u32 = 400;

#[derive(Debug, Clone, Copy)]
enum Action {
    CountClick,
    DrawLine,
    DrawPicture,
    ShowPage(Page),
}

#[derive(Debug, Clone, Copy)]
enum Page {
    One,
    Two,
}

impl Page {
    fn ids(self) -> (&'static str, &'static str) {
        match self {
            Page::One => ("pageOne", "pageTwo"),
            Page::Two => ("pageTwo", "pageOne"),
        }
    }
}

/// Loop-owned state: the click count and where the next line starts.
#[derive(Debug, Default)]
struct Whiteboard {
    clicks: u32,
    pen: (f32, f32),
}

impl Application for Whiteboard {
    type Signal = Action;

    fn on_signal(&mut self, _source: &str, action: Action, ui: &dyn UiHandle) {
        match action {
            Action::CountClick => {
                self.clicks += 1;
                ui.eval(&script::set_inner_html("heading", &format!("Clicks: {}", self.clicks)));
            }
            Action::DrawLine => {
                let to = (
                    rand::random::<f32>() * BOARD_WIDTH as f32,
                    rand::random::<f32>() * BOARD_HEIGHT as f32,
                );
                ui.eval(&script::draw_line("whiteboard", self.pen, to));
                let coords = format!(
                    "({:3.2}, {:3.2}) - ({:3.2}, {:3.2})",
                    self.pen.0, self.pen.1, to.0, to.1
                );
                ui.eval(&script::set_inner_html("coords", &coords));
                self.pen = to;
            }
            Action::DrawPicture => ui.eval(&script::draw_image("whiteboard", PICTURE_URL)),
            Action::ShowPage(page) => {
                let (shown, hidden) = page.ids();
                ui.eval(&script::show(shown));
                ui.eval(&script::hide(hidden));
            }
        }
    }

    fn on_tick(&mut self, now: DateTime<Local>, ui: &dyn UiHandle) {
        ui.eval(&script::set_inner_html("clock", &script::format_clock(&now)));
    }

    fn on_closed(&mut self) {
        info!(clicks = self.clicks, "whiteboard closed");
    }
}

fn build_window(actions: &signal::SignalSender<Action>) -> Result<Window, WindowError> {
    let mut window = Window::new(
        WindowConfig::new()
            .with_title("Dali Whiteboard")
            .with_size(740, 700),
    );

    window.add_head(Script::new(format!(
        "window.addEventListener(\"load\",function(){{{}}});",
        script::show("pageOne")
    )))?;

    window.add(
        Container::new()
            .with_id("tabs")
            .with_style(
                StyleSet::new()
                    .with("border", "1px solid #000088")
                    .with("width", "600px")
                    .with("position", "relative"),
            )
            .with_child(Button::new("Page One").with_on_click("showPageOne"))
            .with_child(Button::new("Page Two").with_on_click("showPageTwo"))
            .with_child(
                Text::new("The Clock Says:")
                    .with_id("clock")
                    .with_style(StyleSet::new().with("position", "absolute").with("right", "1px")),
            ),
    )?;

    window.add(
        Container::new()
            .with_id("pageOne")
            .with_style_property("display", "none")
            .with_child(Heading::new("Clicks: 0").with_id("heading"))
            .with_child(LineBreak::new())
            .with_child(Container::new().with_id("coords").with_child(Text::new(
                "You can draw a line if you want",
            )))
            .with_child(
                Canvas::sized(BOARD_WIDTH, BOARD_HEIGHT)
                    .with_id("whiteboard")
                    .with_style_property("border", "1px solid #000000"),
            )
            .with_child(LineBreak::new())
            .with_child(Button::new("I Count Clicks").with_id("button1").with_on_click("doButtonOne"))
            .with_child(Button::new("Draw A Line").with_id("button2").with_on_click("doButtonTwo"))
            .with_child(
                Button::new("Get A Surprise").with_id("button3").with_on_click("doButtonThree"),
            ),
    )?;

    window.add(
        Container::new()
            .with_id("pageTwo")
            .with_style_property("visibility", "hidden")
            .with_child(Heading::new("This is Page Two")),
    )?;

    window.bind_signal("showPageOne", actions, Action::ShowPage(Page::One))?;
    window.bind_signal("showPageTwo", actions, Action::ShowPage(Page::Two))?;
    window.bind_signal("doButtonOne", actions, Action::CountClick)?;
    window.bind_signal("doButtonTwo", actions, Action::DrawLine)?;
    window.bind_signal("doButtonThree", actions, Action::DrawPicture)?;
    Ok(window)
}

#[tokio::main]
async fn main() -> Result<(), WindowError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (actions, source) = signal::channel("buttons");
    let mut window = build_window(&actions)?;
    for warning in window.validate().warnings() {
        info!(%warning, "page check");
    }

    let renderer = RecordingRenderer::new();
    let recorder = renderer.recorder();
    window.start(&renderer)?;

    // The "user": clicks through the page from the runtime's side.
    let user = Arc::clone(&recorder);
    tokio::spawn(async move {
        let script = [
            "doButtonOne",
            "doButtonOne",
            "doButtonTwo",
            "doButtonTwo",
            "doButtonThree",
            "showPageTwo",
            "showPageOne",
        ];
        for name in script {
            tokio::time::sleep(Duration::from_millis(300)).await;
            user.invoke(name);
        }
        tokio::time::sleep(Duration::from_millis(800)).await;
        user.close_window();
    });

    let board = EventLoop::for_window(&window)?
        .with_source(source)
        .run(Whiteboard::default())
        .await;
    window.close();

    println!("clicks counted: {}", board.clicks);
    for (i, statement) in recorder.evals().iter().enumerate() {
        println!("{i:>3}: {statement}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Drawing ──────────────────────────────────────────────────────

    #[test]
    fn random_lines_stay_on_the_board() {
        let renderer = RecordingRenderer::new();
        let ui = renderer.launch_blank();
        let mut board = Whiteboard::default();
        for _ in 0..200 {
            board.on_signal("button2", Action::DrawLine, ui.as_ref());
            let (x, y) = board.pen;
            assert!((0.0..BOARD_WIDTH as f32).contains(&x), "x = {x}");
            assert!((0.0..BOARD_HEIGHT as f32).contains(&y), "y = {y}");
        }
        assert_eq!(renderer.recorder().evals().len(), 400);
    }
}
