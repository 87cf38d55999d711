//! `StyleSet`: flat property → value map serialized to one inline style string.

use std::collections::BTreeMap;
use std::fmt;

use logos::Logos;

use super::tokenizer::Token;

/// Errors from parsing an inline style string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("declaration `{declaration}` has no `:` separator")]
    MissingColon { declaration: String },
    #[error("declaration `{declaration}` has an empty property name")]
    EmptyProperty { declaration: String },
    #[error("property `{property}` has an empty value")]
    EmptyValue { property: String },
    #[error("unexpected `{found}` at byte {position}")]
    UnexpectedCharacter { position: usize, found: String },
}

/// An unordered set of inline style properties.
///
/// Entries are kept sorted by property name, so two sets with the same
/// entries always render to the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    entries: BTreeMap<String, String>,
}

impl StyleSet {
    /// Create an empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style set from literal `(property, value)` pairs.
    pub fn from_pairs<P, V>(pairs: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Parse an inline declaration list such as `"display:none; color: red"`.
    ///
    /// Blank declarations (`;;`) are skipped. Later declarations of the same
    /// property overwrite earlier ones, as in a browser.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let mut set = Self::new();
        let mut decl_start = 0;
        let mut colon: Option<usize> = None;

        for (result, span) in Token::lexer(input).spanned() {
            let token = result.map_err(|()| StyleError::UnexpectedCharacter {
                position: span.start,
                found: input[span.clone()].to_string(),
            })?;
            match token {
                Token::Colon if colon.is_none() => colon = Some(span.start),
                Token::Semicolon => {
                    set.push_declaration(input, decl_start, colon, span.start)?;
                    decl_start = span.end;
                    colon = None;
                }
                _ => {}
            }
        }
        set.push_declaration(input, decl_start, colon, input.len())?;
        Ok(set)
    }

    fn push_declaration(
        &mut self,
        input: &str,
        start: usize,
        colon: Option<usize>,
        end: usize,
    ) -> Result<(), StyleError> {
        let declaration = input[start..end].trim();
        if declaration.is_empty() {
            return Ok(());
        }
        let colon = colon.ok_or_else(|| StyleError::MissingColon {
            declaration: declaration.to_owned(),
        })?;
        let property = input[start..colon].trim();
        let value = input[colon + 1..end].trim();
        if property.is_empty() {
            return Err(StyleError::EmptyProperty {
                declaration: declaration.to_owned(),
            });
        }
        if value.is_empty() {
            return Err(StyleError::EmptyValue {
                property: property.to_owned(),
            });
        }
        self.set(property, value);
        Ok(())
    }

    /// Insert or overwrite a property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(property.into(), value.into());
    }

    /// Set a property (builder).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.entries.remove(property)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(property, value)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Properties whose entry would not read back as itself.
    ///
    /// `set` accepts anything. An entry is malformed when its rendered
    /// `prop:value` does not parse to exactly that one declaration: blank
    /// names or values, or a value carrying its own `;` or an unbalanced
    /// quote or parenthesis. The pre-start validation pass reports these.
    pub fn malformed_entries(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(property, value)| !is_well_formed(property, value))
            .map(|(property, _)| property.as_str())
    }

    /// Serialize to `prop1:val1;prop2:val2;`. Empty sets render to `""`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in &self.entries {
            write!(f, "{property}:{value};")?;
        }
        Ok(())
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for StyleSet {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (property, value) in iter {
            set.set(property, value);
        }
        set
    }
}

fn is_well_formed(property: &str, value: &str) -> bool {
    match StyleSet::parse(&format!("{property}:{value}")) {
        Ok(parsed) => parsed.len() == 1 && parsed.get(property.trim()) == Some(value.trim()),
        Err(_) => false,
    }
}

impl std::str::FromStr for StyleSet {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
