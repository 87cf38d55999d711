//! Built-in elements: Container, Button, Text, LineBreak, Heading, Canvas,
//! Script, Title, StyleSheetLink.

pub mod button;
pub mod canvas;
pub mod container;
pub mod heading;
pub mod script;
pub mod stylesheet;
pub mod text;
pub mod title;

pub use button::Button;
pub use canvas::Canvas;
pub use container::Container;
pub use heading::Heading;
pub use script::Script;
pub use stylesheet::StyleSheetLink;
pub use text::{LineBreak, Text};
pub use title::Title;
