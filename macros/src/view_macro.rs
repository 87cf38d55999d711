//! RSX view! macro: parse JSX-like syntax and generate dali node-building code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, Lit, LitStr, Result, Token};

use crate::style_lexer::parse_declarations;

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A parsed RSX attribute: `name="value"` or `name=600`.
#[derive(Clone)]
pub(crate) struct Attribute {
    pub name: Ident,
    pub value: Lit,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match &self.value {
            Lit::Str(s) => s.value(),
            other => quote!(#other).to_string(),
        };
        f.debug_struct("Attribute")
            .field("name", &self.name.to_string())
            .field("value", &value)
            .finish()
    }
}

/// A parsed RSX element: `<Tag attrs... />` or `<Tag attrs...> children </Tag>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Ident,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Element>,
    pub self_closing: bool,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag.to_string())
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .field("self_closing", &self.self_closing)
            .finish()
    }
}

/// The top-level view! input: a sequence of elements.
#[derive(Debug)]
struct ViewInput {
    elements: Vec<Element>,
}

// ---------------------------------------------------------------------------
// Constructor argument attributes
// ---------------------------------------------------------------------------

/// Element types whose `new()` takes one string, and the attribute that feeds it.
const CONSTRUCTOR_ATTRS: &[(&str, &str)] = &[
    ("Button", "label"),
    ("Text", "text"),
    ("Heading", "text"),
    ("Title", "text"),
    ("Script", "code"),
    ("StyleSheetLink", "href"),
];

fn constructor_attr(tag: &Ident) -> Option<&'static str> {
    CONSTRUCTOR_ATTRS
        .iter()
        .find(|(t, _)| tag == t)
        .map(|(_, attr)| *attr)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for ViewInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut elements = Vec::new();
        while !input.is_empty() {
            elements.push(parse_element(input)?);
        }
        Ok(ViewInput { elements })
    }
}

/// Parse a single RSX element from the token stream.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    input.parse::<Token![<]>()?;
    let tag: Ident = input.parse()?;

    let mut attrs = Vec::new();
    loop {
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                children: Vec::new(),
                self_closing: true,
            });
        }

        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }

        // `name = "value"` or `name = 42`
        let attr_name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let attr_value: Lit = input.parse()?;
        if !matches!(attr_value, Lit::Str(_) | Lit::Int(_)) {
            return Err(Error::new(
                attr_value.span(),
                "attribute values must be string or integer literals",
            ));
        }
        attrs.push(Attribute {
            name: attr_name,
            value: attr_value,
        });
    }

    let mut children = Vec::new();
    loop {
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing_tag: Ident = input.parse()?;
            if closing_tag != tag {
                return Err(Error::new(
                    closing_tag.span(),
                    format!(
                        "mismatched closing tag: expected `</{}>`, found `</{}>`",
                        tag, closing_tag
                    ),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }

        if input.peek(Token![<]) {
            children.push(parse_element(input)?);
        } else {
            return Err(input.error("expected `<` to start a child element or `</` to close the parent"));
        }
    }

    Ok(Element {
        tag,
        attrs,
        children,
        self_closing: false,
    })
}

// ---------------------------------------------------------------------------
// Style literals
// ---------------------------------------------------------------------------

fn generate_style(value: &Lit) -> Result<TokenStream> {
    let Lit::Str(lit) = value else {
        return Err(Error::new(value.span(), "`style` must be a string literal"));
    };
    let pairs = parse_declarations(&lit.value()).map_err(|msg| Error::new(lit.span(), msg))?;
    if pairs.is_empty() {
        return Ok(quote! { ::dali::style::StyleSet::new() });
    }
    let entries = pairs.iter().map(|(property, value)| {
        let property = LitStr::new(property, lit.span());
        let value = LitStr::new(value, lit.span());
        quote! { (#property, #value) }
    });
    Ok(quote! { ::dali::style::StyleSet::from_pairs([#(#entries),*]) })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate the expression for a single element.
fn generate_element(elem: &Element) -> Result<TokenStream> {
    let tag = &elem.tag;
    let ctor_name = constructor_attr(tag);
    let ctor_attr = ctor_name.and_then(|name| elem.attrs.iter().find(|a| a.name == name));

    let mut expr = match (ctor_name, ctor_attr) {
        (_, Some(attr)) => {
            let val = &attr.value;
            quote! { ::dali::elements::#tag::new(#val) }
        }
        (Some(_), None) => quote! { ::dali::elements::#tag::new("") },
        (None, None) => quote! { ::dali::elements::#tag::new() },
    };

    for attr in &elem.attrs {
        if ctor_attr.is_some_and(|ctor| ctor.name == attr.name) {
            continue;
        }
        let val = &attr.value;
        expr = match attr.name.to_string().as_str() {
            "id" => quote! { ::dali::dom::ElementExt::with_id(#expr, #val) },
            "class" => quote! { ::dali::dom::ElementExt::with_class(#expr, #val) },
            "style" => {
                let style = generate_style(val)?;
                quote! { ::dali::dom::ElementExt::with_style(#expr, #style) }
            }
            name => {
                let method = Ident::new(&format!("with_{name}"), attr.name.span());
                quote! { #expr.#method(#val) }
            }
        };
    }

    for child in &elem.children {
        let child_code = generate_element(child)?;
        expr = quote! { #expr.with_child(#child_code) };
    }

    Ok(expr)
}

/// Entry point: generate code for the entire view! macro.
pub(crate) fn view_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ViewInput = syn::parse2(input)?;

    if parsed.elements.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "view! macro requires at least one element",
        ));
    }

    let appends = parsed
        .elements
        .iter()
        .map(|elem| {
            let code = generate_element(elem)?;
            Ok(quote! { __nodes.append(#code); })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        {
            let mut __nodes = ::dali::dom::NodeSequence::new();
            #(#appends)*
            __nodes
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================
