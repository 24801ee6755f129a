//! Wrapper for `N_FIELD` nodes.

use super::children_of_kind;
use crate::{RecordLanguage, SyntaxKind};

/// One `", "`-delimited field of a record.
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) syntax: rowan::SyntaxNode<RecordLanguage>,
}

impl Field {
    /// Text of every `": "`-delimited part, in order.
    ///
    /// A field without a pair separator has exactly one part. Empty parts are
    /// kept, so `": v"` yields `["", "v"]`.
    #[must_use]
    pub fn parts(&self) -> Vec<String> {
        children_of_kind(&self.syntax, SyntaxKind::N_PART, |n| n.text().to_string())
    }

    /// Text of the part at `index`, if present.
    #[must_use]
    pub fn part(&self, index: usize) -> Option<String> {
        self.syntax
            .children()
            .filter(|n| n.kind() == SyntaxKind::N_PART)
            .nth(index)
            .map(|n| n.text().to_string())
    }

    /// Whether the field contains at least one `": "`.
    #[must_use]
    pub fn has_pair_separator(&self) -> bool {
        self.syntax
            .children_with_tokens()
            .any(|e| e.kind() == SyntaxKind::T_PAIR_SEP)
    }

    /// The key part, present only when the field carries a pair separator.
    #[must_use]
    pub fn key(&self) -> Option<String> {
        self.has_pair_separator().then(|| self.part(0)).flatten()
    }

    /// The value part, i.e. the text between the first and second `": "`.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.part(1)
    }

    /// Text content of this field, separators included.
    #[must_use]
    pub fn text(&self) -> String {
        self.syntax.text().to_string()
    }
}
