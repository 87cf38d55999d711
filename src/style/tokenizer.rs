//! logos-based tokenizer for inline style declarations.
//!
//! Only the characters that carry structure in a `style="..."` attribute are
//! significant: `:` separates a property from its value and `;` ends a
//! declaration. Quoted strings and parenthesised groups are lexed as single
//! tokens so that `url(http://host/a.png)` or `content: "a;b"` keep their
//! inner punctuation.

use logos::Logos;

/// Token produced by the inline style lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")]
pub enum Token {
    // ── Compound tokens ──────────────────────────────────────────────

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    SingleQuoted,

    /// Parenthesised group: `url(...)`, `rgb(0, 0, 0)`.
    #[regex(r"\([^)]*\)")]
    Group,

    /// Any run of characters without structural meaning.
    #[regex(r#"[^:;"'()\s]+"#)]
    Word,

    // ── Punctuation ──────────────────────────────────────────────────

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,
}
