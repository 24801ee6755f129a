//! Wrapper for the root `N_RECORD` node.
//!
//! # Examples
//!
//! ```rust
//! use peek2csv::parse;
//!
//! let parsed = parse("name: alice, age: 30");
//! let keys: Vec<_> = parsed.root().fields().iter().filter_map(|f| f.key()).collect();
//! assert_eq!(keys, ["name", "age"]);
//! ```

use rowan::GreenNode;

use super::{Field, children_of_kind};
use crate::{RecordLanguage, SyntaxKind};

/// The root of a parsed record line.
#[derive(Debug, Clone)]
pub struct Record {
    pub(crate) syntax: rowan::SyntaxNode<RecordLanguage>,
}

impl Record {
    /// Create a new `Record` from a green node.
    #[must_use]
    pub fn from_green(green: GreenNode) -> Self {
        Self {
            syntax: rowan::SyntaxNode::<RecordLanguage>::new_root(green),
        }
    }

    /// Obtain the underlying syntax node.
    #[must_use]
    pub fn syntax(&self) -> &rowan::SyntaxNode<RecordLanguage> {
        &self.syntax
    }

    /// Text content of this record.
    #[must_use]
    pub fn text(&self) -> String {
        self.syntax.text().to_string()
    }

    /// Collect all fields in source order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        children_of_kind(&self.syntax, SyntaxKind::N_FIELD, |syntax| Field {
            syntax,
        })
    }
}
