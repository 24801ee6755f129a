//! CST construction utilities.
//!
//! This module builds a `rowan::GreenNode` from the token stream of a single
//! record line. The tree always has the shape
//! `N_RECORD > N_FIELD+ > N_PART+`: every `T_FIELD_SEP` closes the current
//! field and opens a new one, and every `T_PAIR_SEP` closes the current part.
//! Separator tokens stay in the tree so the CST remains lossless.

use log::warn;
use rowan::{GreenNode, GreenNodeBuilder, Language};

use crate::{RecordLanguage, Span, SyntaxKind};

fn start(builder: &mut GreenNodeBuilder, kind: SyntaxKind) {
    builder.start_node(RecordLanguage::kind_to_raw(kind));
}

/// Construct the CST for one record line from its token stream.
///
/// An empty token stream still yields one field holding one empty part, which
/// matches splitting an empty string on a separator.
pub(crate) fn build_green_tree(tokens: &[(SyntaxKind, Span)], src: &str) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    start(&mut builder, SyntaxKind::N_RECORD);
    start(&mut builder, SyntaxKind::N_FIELD);
    start(&mut builder, SyntaxKind::N_PART);

    for &(kind, ref span) in tokens {
        debug_assert!(
            span.start <= span.end && span.end <= src.len(),
            "token span {span:?} out of bounds for a {}-byte line",
            src.len()
        );
        let Some(text) = src.get(span.clone()) else {
            warn!("dropping token with span {span:?} outside a {}-byte line", src.len());
            continue;
        };
        match kind {
            SyntaxKind::T_FIELD_SEP => {
                builder.finish_node(); // part
                builder.finish_node(); // field
                push_token(&mut builder, kind, text);
                start(&mut builder, SyntaxKind::N_FIELD);
                start(&mut builder, SyntaxKind::N_PART);
            }
            SyntaxKind::T_PAIR_SEP => {
                builder.finish_node(); // part
                push_token(&mut builder, kind, text);
                start(&mut builder, SyntaxKind::N_PART);
            }
            _ => push_token(&mut builder, kind, text),
        }
    }

    builder.finish_node(); // part
    builder.finish_node(); // field
    builder.finish_node(); // record
    builder.finish()
}

/// Push a token, wrapping lexer failures in an `N_ERROR` node.
fn push_token(builder: &mut GreenNodeBuilder, kind: SyntaxKind, text: &str) {
    let raw = RecordLanguage::kind_to_raw(kind);
    if kind == SyntaxKind::N_ERROR {
        start(builder, SyntaxKind::N_ERROR);
        builder.token(raw, text);
        builder.finish_node();
    } else {
        builder.token(raw, text);
    }
}
