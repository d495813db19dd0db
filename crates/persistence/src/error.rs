//! Errors raised at the row/value conversion boundary.

use thiserror::Error;

/// Result type of the conversion layer.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion failure between a quantity value and its row representation.
///
/// All variants are terminal at this boundary: nothing here is retried or
/// repaired locally, callers decide whether to fail the enclosing read or
/// write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The variant tag found in a stored row is outside the closed set of
    /// known quantity kinds. A schema/version mismatch between the code and
    /// the stored data, never coerced or defaulted away.
    #[error("incompatible quantity type: {0}")]
    IncompatibleType(String),

    /// The stored text cannot be parsed into the target unit enumerant or
    /// numeric kind. Corrupt data or a foreign writer; no best-effort
    /// reconstruction is attempted.
    #[error("malformed quantity row: {0}")]
    MalformedRow(String),

    /// A mutation was attempted on an immutable quantity value through the
    /// codec's property path.
    #[error("quantity values are immutable")]
    ImmutableValue,
}

impl ConversionError {
    pub fn incompatible_type(tag: impl Into<String>) -> Self {
        Self::IncompatibleType(tag.into())
    }

    pub fn malformed_row(msg: impl Into<String>) -> Self {
        Self::MalformedRow(msg.into())
    }
}
