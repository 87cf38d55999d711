//! Element composition model: the `Node` enum, `NodeSequence`, markup writing
//! and tree queries.

pub mod markup;
pub mod node;
pub mod query;
pub mod sequence;

pub use node::{Attrs, Element, ElementExt, Node};
pub use sequence::NodeSequence;
