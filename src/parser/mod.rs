//! Record parser producing a rowan CST.
//!
//! This module contains the entry point for parsing a single record line.
//! The line is tokenised with [`tokenize`] and the tokens are wrapped into a
//! `rowan::GreenNode` whose shape mirrors the `", "` / `": "` split structure.
//! Parsing never fails: malformed lines simply produce fields with a single
//! part, and lexer failures become `N_ERROR` nodes.

use crate::{Span, SyntaxKind, tokenize};

pub mod ast;
mod cst_builder;

use cst_builder::build_green_tree;

/// Result of a parse operation.
#[derive(Debug)]
pub struct Parsed {
    root: ast::Record,
    errors: Vec<Span>,
}

impl Parsed {
    /// Access the typed AST root.
    #[must_use]
    pub fn root(&self) -> &ast::Record {
        &self.root
    }

    /// Spans of tokens the lexer could not classify.
    #[must_use]
    pub fn errors(&self) -> &[Span] {
        &self.errors
    }
}

/// Parse one record line.
///
/// The caller is expected to have stripped the line terminator; any trailing
/// whitespace left in `src` becomes part of the last field.
///
/// # Examples
///
/// ```rust
/// use peek2csv::parse;
///
/// let parsed = parse("name: alice, age: 30");
/// assert_eq!(parsed.root().fields().len(), 2);
/// assert!(parsed.errors().is_empty());
/// ```
#[must_use]
pub fn parse(src: &str) -> Parsed {
    let tokens = tokenize(src);
    let errors = tokens
        .iter()
        .filter(|(kind, _)| *kind == SyntaxKind::N_ERROR)
        .map(|(_, span)| span.clone())
        .collect();

    let green = build_green_tree(&tokens, src);
    let root = ast::Record::from_green(green);

    Parsed { root, errors }
}

#[cfg(test)]
mod tests;
