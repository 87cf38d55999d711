//! Proc macros for dali: `view!` RSX composition.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `dali`.

use proc_macro::TokenStream;

mod style_lexer;
mod view_macro;

/// RSX-style node composition macro.
///
/// Expands to a block that evaluates to a `dali::dom::NodeSequence`.
///
/// # Syntax
///
/// - `<Type />`: element with no children
/// - `<Type attr="val"> ... </Type>`: element with children (appended with `with_child`)
///
/// # Attributes
///
/// - `id`, `class` become `ElementExt::with_id` / `with_class`
/// - `style="prop:value; ..."` is checked at compile time and becomes a `StyleSet`
/// - `label` (Button), `text` (Text, Heading, Title), `code` (Script) and
///   `href` (StyleSheetLink) become the `::new()` argument
/// - any other attribute becomes a `.with_<name>(value)` call; values may be
///   string or integer literals
///
/// # Example
///
/// ```ignore
/// let body = view! {
///     <Heading text="Clicks: 0" id="heading" />
///     <Container id="pageOne" style="display:none">
///         <Canvas id="whiteboard" width=600 height=400 />
///         <Button label="I Count Clicks" on_click="doButtonOne" />
///     </Container>
/// };
/// ```
#[proc_macro]
pub fn view(input: TokenStream) -> TokenStream {
    view_macro::view_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
