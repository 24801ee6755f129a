//! Light-weight AST wrappers built around `rowan` syntax nodes.
//!
//! These wrappers expose typed navigation over the record CST produced by the
//! parser: a [`Record`] owns its [`Field`]s, and each field exposes the text of
//! its `": "`-delimited parts.

mod field;
mod record;

pub use field::Field;
pub use record::Record;

use crate::{RecordLanguage, SyntaxKind};

/// Common interface for AST wrappers.
pub trait AstNode {
    /// Access the underlying syntax node.
    fn syntax(&self) -> &rowan::SyntaxNode<RecordLanguage>;
}

macro_rules! impl_ast_node {
    ($ty:ty) => {
        impl AstNode for $ty {
            fn syntax(&self) -> &rowan::SyntaxNode<RecordLanguage> {
                &self.syntax
            }
        }
    };
}

impl_ast_node!(Record);
impl_ast_node!(Field);

/// Collect the child nodes of `node` with the given `kind`.
fn children_of_kind<T>(
    node: &rowan::SyntaxNode<RecordLanguage>,
    kind: SyntaxKind,
    map: impl Fn(rowan::SyntaxNode<RecordLanguage>) -> T,
) -> Vec<T> {
    node.children().filter(|n| n.kind() == kind).map(map).collect()
}
