//! `rowan` integration and record syntax kinds.
//!
//! This module defines the `SyntaxKind` enum covering every token and node a
//! record line can produce. The enumeration is used by `rowan` to tag syntax
//! tree elements. The `RecordLanguage` newtype implements `rowan::Language`
//! using conversions provided by `num_derive`.

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};
use rowan::Language as RowanLanguage;
use rowan::SyntaxKind as RowanSyntaxKind;

/// Every possible token or node in a record syntax tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "token naming mirrors rowan kind tables")]
pub enum SyntaxKind {
    // Tokens
    /// The field separator `", "`.
    T_FIELD_SEP,
    /// The key/value separator `": "`.
    T_PAIR_SEP,
    /// A `,` that is not followed by a space.
    T_COMMA,
    /// A `:` that is not followed by a space.
    T_COLON,
    /// A run of characters other than `,` and `:`.
    T_TEXT,

    // Nodes
    /// A whole record line.
    N_RECORD,
    /// One `", "`-delimited field of a record.
    N_FIELD,
    /// One `": "`-delimited part of a field.
    N_PART,

    // Special
    N_ERROR,
}

/// Newtype wrapper allowing `rowan` to store `SyntaxKind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordLanguage;

impl RowanLanguage for RecordLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: RowanSyntaxKind) -> Self::Kind {
        SyntaxKind::from_u16(raw.0).unwrap_or(SyntaxKind::N_ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> RowanSyntaxKind {
        RowanSyntaxKind(
            kind.to_u16()
                .unwrap_or_else(|| unreachable!("all SyntaxKind variants map to u16")),
        )
    }
}
