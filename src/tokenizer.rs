//! Lexical analysis for record lines.
//!
//! This module exposes [`tokenize`], which converts a single record line into
//! a sequence of `(SyntaxKind, Span)` pairs. It uses the `logos` crate so the
//! CST can mirror the input exactly.
//!
//! Separators are matched longest-first: `", "` wins over a lone `,` and
//! `": "` over a lone `:`. The two separators share no characters that could
//! overlap, so one left-to-right pass splits a line the same way as splitting
//! on `", "` and then splitting each field on `": "`.

use logos::Logos;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[token(", ")]
    FieldSep,
    #[token(": ")]
    PairSep,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[regex(r"[^,:]+")]
    Text,
}

/// Tokenise a record line.
///
/// Every byte of `src` is covered by exactly one token, so concatenating the
/// token texts reproduces the input.
///
/// # Examples
///
/// ```rust
/// use peek2csv::{SyntaxKind, tokenize};
///
/// let tokens = tokenize("name: alice, age: 30");
/// let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         SyntaxKind::T_TEXT,
///         SyntaxKind::T_PAIR_SEP,
///         SyntaxKind::T_TEXT,
///         SyntaxKind::T_FIELD_SEP,
///         SyntaxKind::T_TEXT,
///         SyntaxKind::T_PAIR_SEP,
///         SyntaxKind::T_TEXT,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::FieldSep => SyntaxKind::T_FIELD_SEP,
            Token::PairSep => SyntaxKind::T_PAIR_SEP,
            Token::Comma => SyntaxKind::T_COMMA,
            Token::Colon => SyntaxKind::T_COLON,
            Token::Text => SyntaxKind::T_TEXT,
        };
        out.push((kind, span));
    }
    out
}
