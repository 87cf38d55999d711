//! Inline styles: the flat `StyleSet` map and its declaration tokenizer.

pub mod set;
pub mod tokenizer;

pub use set::{StyleError, StyleSet};
