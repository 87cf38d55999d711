//! Compile-time reading of `style="..."` literals.
//!
//! Uses the same token rules as `dali::style::tokenizer` and the same
//! declaration grammar as `StyleSet::parse`, so a literal accepted here is
//! accepted at runtime too. `tests/fixtures/style_cases.json` pins the two
//! together.

use std::collections::BTreeMap;

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")]
enum Token {
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[regex(r"\([^)]*\)")]
    Group,

    #[regex(r#"[^:;"'()\s]+"#)]
    Word,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,
}

/// Parse an inline declaration list into `(property, value)` pairs, sorted by
/// property. Later declarations of a property overwrite earlier ones.
pub(crate) fn parse_declarations(input: &str) -> Result<Vec<(String, String)>, String> {
    let mut declarations = BTreeMap::new();
    let mut decl_start = 0;
    let mut colon: Option<usize> = None;

    for (result, span) in Token::lexer(input).spanned() {
        let token = result
            .map_err(|()| format!("unexpected `{}` at byte {}", &input[span.clone()], span.start))?;
        match token {
            Token::Colon if colon.is_none() => colon = Some(span.start),
            Token::Semicolon => {
                push_declaration(&mut declarations, input, decl_start, colon, span.start)?;
                decl_start = span.end;
                colon = None;
            }
            _ => {}
        }
    }
    push_declaration(&mut declarations, input, decl_start, colon, input.len())?;
    Ok(declarations.into_iter().collect())
}

fn push_declaration(
    declarations: &mut BTreeMap<String, String>,
    input: &str,
    start: usize,
    colon: Option<usize>,
    end: usize,
) -> Result<(), String> {
    let declaration = input[start..end].trim();
    if declaration.is_empty() {
        return Ok(());
    }
    let colon = colon.ok_or_else(|| format!("declaration `{declaration}` has no `:` separator"))?;
    let property = input[start..colon].trim();
    let value = input[colon + 1..end].trim();
    if property.is_empty() {
        return Err(format!("declaration `{declaration}` has an empty property name"));
    }
    if value.is_empty() {
        return Err(format!("property `{property}` has an empty value"));
    }
    declarations.insert(property.to_owned(), value.to_owned());
    Ok(())
}
