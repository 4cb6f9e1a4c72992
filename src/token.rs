use serde::{Deserialize, Serialize};

use crate::location::BoundingBox;

/// The caller-assigned identity of a [`Token`]. Unique within one search.
pub type TokenIndex = usize;
/// The number printed on a token.
pub type Value = f64;

/// A number read off the screen, together with where it was found.
///
/// Tokens are never modified by a search; results refer back to the caller's tokens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Identity reported back in results. Serialized as `originalIndex`.
    #[serde(rename = "originalIndex")]
    pub index: TokenIndex,
    /// The number on the token. Expected to be finite and non-negative.
    pub value: Value,
    /// Where the token was found on screen.
    pub bbox: BoundingBox,
}

impl Token {
    /// Construct a token from its parts.
    pub fn new(index: TokenIndex, value: Value, bbox: BoundingBox) -> Self {
        Self { index, value, bbox }
    }

    /// Number `(value, bbox)` pairs by their position in `values`.
    pub fn from_positions(values: impl IntoIterator<Item = (Value, BoundingBox)>) -> Vec<Self> {
        values.into_iter()
            .enumerate()
            .map(|(index, (value, bbox))| Self::new(index, value, bbox))
            .collect()
    }
}

/// A token as handed over by a token producer, whose index may be implied by its position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// See [`Token::value`].
    pub value: Value,
    /// See [`Token::bbox`].
    pub bbox: BoundingBox,
    /// The token's index if the producer assigned one.
    #[serde(rename = "originalIndex", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<TokenIndex>,
}

impl TokenRecord {
    /// Resolve every record to a [`Token`], falling back to the record's position for missing indices.
    pub fn resolve(records: &[TokenRecord]) -> Vec<Token> {
        records.iter()
            .enumerate()
            .map(|(position, record)| Token::new(record.index.unwrap_or(position), record.value, record.bbox))
            .collect()
    }
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            value: token.value,
            bbox: token.bbox,
            index: Some(token.index),
        }
    }
}
