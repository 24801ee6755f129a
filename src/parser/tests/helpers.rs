//! Shared helpers for parser tests.

use crate::{Parsed, parse};

type SyntaxNode = rowan::SyntaxNode<crate::RecordLanguage>;
type SyntaxElement = rowan::SyntaxElement<crate::RecordLanguage>;

/// Parse `src` and assert that the lexer reported no errors.
#[track_caller]
pub(super) fn parse_ok(src: &str) -> Parsed {
    let parsed = parse(src);
    assert!(
        parsed.errors().is_empty(),
        "unexpected lexer errors: {:?}",
        parsed.errors()
    );
    parsed
}

/// Collect the text of a syntax subtree.
///
/// Uses an explicit stack so deep trees do not risk recursion overflow.
pub(super) fn pretty_print(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut stack = vec![SyntaxElement::Node(node.clone())];

    while let Some(item) = stack.pop() {
        match item {
            SyntaxElement::Token(t) => out.push_str(t.text()),
            SyntaxElement::Node(n) => {
                let children: Vec<SyntaxElement> = n.children_with_tokens().collect();
                stack.extend(children.into_iter().rev());
            }
        }
    }

    out
}

/// Assert that parsing `src` and printing the tree yields `src` again.
#[track_caller]
pub(super) fn round_trip(src: &str) {
    let parsed = parse_ok(src);
    assert_eq!(pretty_print(parsed.root().syntax()), src);
}

/// The parts of every field of `src`, in order.
pub(super) fn field_parts(src: &str) -> Vec<Vec<String>> {
    parse_ok(src)
        .root()
        .fields()
        .iter()
        .map(crate::ast::Field::parts)
        .collect()
}
