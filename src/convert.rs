//! Conversion of record lines into CSV rows.
//!
//! A record line looks like `key1: value1, key2: value2`. In
//! [`Mode::Header`] the keys are joined into a header row, in [`Mode::Data`]
//! the values are. A line containing any field without a `": "` separator
//! produces no row at all; there is no partial output.
//!
//! Values are copied verbatim. Nothing is quoted or escaped, so a value that
//! itself contains `", "` or `": "` shifts columns in the output.

use log::debug;
use thiserror::Error;

use crate::ast::Field;
use crate::{Span, parse};

/// Separator between fields of an input record.
pub const FIELD_SEPARATOR: &str = ", ";
/// Separator between the key and the value of a field.
pub const PAIR_SEPARATOR: &str = ": ";
/// Delimiter placed between columns of an output row.
pub const OUTPUT_DELIMITER: char = ',';

/// Which side of each `key: value` pair a conversion selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Select keys to build a header row.
    Header,
    /// Select values to build a data row.
    Data,
}

impl Mode {
    /// Map the boolean "emit keys" flag onto a mode.
    #[must_use]
    pub fn from_emit_keys(emit_keys: bool) -> Self {
        if emit_keys { Self::Header } else { Self::Data }
    }

    /// Index of the selected part after splitting a field on `": "`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Header => 0,
            Self::Data => 1,
        }
    }
}

/// Reasons a record line produces no row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A field does not contain the `": "` separator.
    #[error("field {field} ({text:?}) has no key/value separator")]
    MissingPairSeparator {
        /// Zero-based position of the field in the record.
        field: usize,
        /// Text of the offending field.
        text: String,
    },
    /// The lexer could not classify part of the line.
    #[error("unrecognised input at {span:?}")]
    InvalidToken { span: Span },
}

/// Convert `line` into one CSV row, reporting why it was rejected.
///
/// Trailing whitespace, including the line terminator, is stripped first.
///
/// # Errors
/// Returns [`ConvertError::MissingPairSeparator`] when any field lacks `": "`
/// and [`ConvertError::InvalidToken`] when the line could not be lexed.
///
/// # Examples
///
/// ```rust
/// use peek2csv::{ConvertError, Mode, try_convert};
///
/// assert_eq!(try_convert("k1: v1, k2: v2\n", Mode::Data).as_deref(), Ok("v1,v2"));
/// assert!(matches!(
///     try_convert("k1: v1, oops", Mode::Header),
///     Err(ConvertError::MissingPairSeparator { field: 1, .. })
/// ));
/// ```
pub fn try_convert(line: &str, mode: Mode) -> Result<String, ConvertError> {
    let parsed = parse(line.trim_end());
    if let Some(span) = parsed.errors().first() {
        return Err(ConvertError::InvalidToken { span: span.clone() });
    }

    let fields = parsed.root().fields();
    let mut row = String::with_capacity(line.len());
    for (position, field) in fields.iter().enumerate() {
        let selected = select(field, mode).ok_or_else(|| ConvertError::MissingPairSeparator {
            field: position,
            text: field.text(),
        })?;
        if position > 0 {
            row.push(OUTPUT_DELIMITER);
        }
        row.push_str(&selected);
    }
    Ok(row)
}

fn select(field: &Field, mode: Mode) -> Option<String> {
    if !field.has_pair_separator() {
        return None;
    }
    field.part(mode.index())
}

/// Convert `line` into one CSV row, or nothing if the line is malformed.
///
/// This is the lenient form of [`try_convert`]: the rejection reason is only
/// logged at `debug` level.
///
/// # Examples
///
/// ```rust
/// use peek2csv::{Mode, convert};
///
/// let line = "name: alice, age: 30\n";
/// assert_eq!(convert(line, Mode::Header).as_deref(), Some("name,age"));
/// assert_eq!(convert(line, Mode::Data).as_deref(), Some("alice,30"));
/// assert_eq!(convert("broken\n", Mode::Data), None);
/// ```
#[must_use]
pub fn convert(line: &str, mode: Mode) -> Option<String> {
    match try_convert(line, mode) {
        Ok(row) => Some(row),
        Err(err) => {
            debug!("skipping {mode:?} row: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("k1: v1, k2: v2", Mode::Header, Some("k1,k2"))]
    #[case("k1: v1, k2: v2", Mode::Data, Some("v1,v2"))]
    #[case("k: v\r\n", Mode::Data, Some("v"))]
    #[case("k: v  \t\n", Mode::Data, Some("v"))]
    #[case("a: b: c", Mode::Data, Some("b"))]
    #[case(": v", Mode::Header, Some(""))]
    #[case("k: ", Mode::Data, None)]
    #[case("a: 1, b: ", Mode::Data, None)]
    #[case("a: 1, b: \n", Mode::Header, None)]
    #[case("k: v,", Mode::Data, Some("v,"))]
    #[case("k: v, ", Mode::Data, Some("v,"))]
    #[case("broken", Mode::Header, None)]
    #[case("broken", Mode::Data, None)]
    #[case("", Mode::Header, None)]
    #[case("\n", Mode::Data, None)]
    #[case("k: v, broken, x: y", Mode::Data, None)]
    fn converts_lines(#[case] line: &str, #[case] mode: Mode, #[case] expected: Option<&str>) {
        assert_eq!(convert(line, mode).as_deref(), expected);
    }

    #[rstest]
    #[case(true, Mode::Header, 0)]
    #[case(false, Mode::Data, 1)]
    fn mode_from_flag(#[case] flag: bool, #[case] mode: Mode, #[case] index: usize) {
        assert_eq!(Mode::from_emit_keys(flag), mode);
        assert_eq!(mode.index(), index);
    }

    #[test]
    fn reports_first_offending_field() {
        let err = try_convert("a: 1, b, c", Mode::Data);
        assert_eq!(
            err,
            Err(ConvertError::MissingPairSeparator {
                field: 1,
                text: "b".into(),
            })
        );
    }

    #[test]
    fn separators_match_lexer() {
        assert_eq!(
            crate::tokenize(FIELD_SEPARATOR).first().map(|(k, _)| *k),
            Some(crate::SyntaxKind::T_FIELD_SEP)
        );
        assert_eq!(
            crate::tokenize(PAIR_SEPARATOR).first().map(|(k, _)| *k),
            Some(crate::SyntaxKind::T_PAIR_SEP)
        );
    }
}
