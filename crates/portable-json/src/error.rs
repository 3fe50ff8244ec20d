use thiserror::Error;

use crate::value::{JsonKind, PortableJson};

/// Malformed JSON text. Offsets are byte positions into the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token at offset {0}")]
    Invalid(usize),
    #[error("invalid string escape at offset {0}")]
    InvalidEscape(usize),
    #[error("trailing characters at offset {0}")]
    TrailingData(usize),
}

/// A typed accessor was invoked against the wrong shape, a missing key, or
/// an out-of-range index. Never coerced, never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("TYPE_MISMATCH: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: JsonKind,
        actual: JsonKind,
    },
    #[error("MISSING_KEY: {0}")]
    MissingKey(String),
    #[error("INDEX_OUT_OF_RANGE: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl AccessError {
    pub(crate) fn mismatch(expected: JsonKind, found: &PortableJson) -> Self {
        AccessError::TypeMismatch {
            expected,
            actual: found.kind(),
        }
    }
}
