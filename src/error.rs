use thiserror::Error;

use crate::token::{TokenIndex, Value};

/// Ways a token may violate the preconditions of a search.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The token's value is NaN or infinite.
    #[error("token {index} has a non-finite value {value}")]
    NonFiniteValue {
        /// See [`ValidationError::index`].
        index: TokenIndex,
        /// The offending value.
        value: Value,
    },
    /// The token's value is below zero. Pruning a chain once it overshoots the target assumes otherwise.
    #[error("token {index} has a negative value {value}")]
    NegativeValue {
        /// See [`ValidationError::index`].
        index: TokenIndex,
        /// The offending value.
        value: Value,
    },
    /// A bounding box coordinate is NaN or infinite.
    #[error("token {index} has a non-finite bounding box")]
    NonFiniteBounds {
        /// See [`ValidationError::index`].
        index: TokenIndex,
    },
    /// `x0 > x1` or `y0 > y1`.
    #[error("token {index} has an inverted bounding box")]
    InvertedBounds {
        /// See [`ValidationError::index`].
        index: TokenIndex,
    },
    /// Another token in the same search already uses this index.
    #[error("token index {index} is used more than once")]
    DuplicateIndex {
        /// The repeated index; the first token carrying it is kept.
        index: TokenIndex,
    },
}

impl ValidationError {
    /// The index of the offending token.
    pub fn index(&self) -> TokenIndex {
        match self {
            Self::NonFiniteValue { index, .. }
            | Self::NegativeValue { index, .. }
            | Self::NonFiniteBounds { index }
            | Self::InvertedBounds { index }
            | Self::DuplicateIndex { index } => *index,
        }
    }
}
