//! Library crate for peek2csv.
//!
//! Turns `key: value, key: value` record lines into CSV rows. The record
//! lexer and CST live in [`tokenizer`] and [`parser`], the per-line
//! conversion in [`convert`] and the stdin-to-stdout loop in [`driver`].

#![forbid(unsafe_code)]

pub mod convert;
pub mod driver;
pub mod language;
pub mod parser;
pub mod tokenizer;

pub use convert::{ConvertError, Mode, convert, try_convert};
pub use driver::{RunError, Summary, run};
pub use language::{RecordLanguage, SyntaxKind};
pub use parser::{Parsed, ast, parse};
pub use tokenizer::{Span, tokenize};
