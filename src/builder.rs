//! Incremental assembly and validation of a [`Board`].

use itertools::Itertools;

use crate::board::{connect, Board};
use crate::config::SearchConfig;
use crate::error::ValidationError;
use crate::location::BoundingBox;
use crate::token::{Token, Value};
use crate::validate::{Admission, Validator};

/// Assembles a [`Board`] one token at a time, validating each according to the configured
/// [`ValidationPolicy`](crate::ValidationPolicy).
///
/// Under [`Abort`](crate::ValidationPolicy::Abort) the first offending token leaves the builder invalid;
/// every later addition is ignored and [`Self::build`] reports why.
/// Under [`Reject`](crate::ValidationPolicy::Reject) offending tokens are set aside and listed by [`Board::rejected`].
///
/// Builders can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    config: SearchConfig,
    tokens: Vec<Token>,
    validator: Validator,
    // tokens offered so far, accepted or not
    position: usize,
    rejected: Vec<ValidationError>,
    invalid_reasons: Vec<ValidationError>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl BoardBuilder {
    /// An empty builder for boards searched with `config`.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            tokens: Vec::new(),
            validator: Validator::new(config.validation),
            position: 0,
            rejected: Vec::new(),
            invalid_reasons: Vec::new(),
        }
    }

    /// Add a token whose index is the number of tokens offered before it.
    pub fn add_token(&mut self, value: Value, bbox: BoundingBox) -> &mut Self {
        self.add(Token::new(self.position, value, bbox))
    }

    /// Add a token carrying its own index.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add(&mut self, token: Token) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }
        self.position += 1;

        match self.validator.admit(&token) {
            Ok(Admission::Accepted) => self.tokens.push(token),
            Ok(Admission::Rejected(reason)) => self.rejected.push(reason),
            Err(reason) => self.invalid_reasons.push(reason),
        }

        self
    }

    /// Shorthand for multiple calls to [`Self::add`], with the same conditions.
    pub fn extend(&mut self, tokens: impl IntoIterator<Item = Token>) -> &mut Self {
        for token in tokens {
            self.add(token);
        }

        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<ValidationError>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<ValidationError>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`], computing adjacency between all accepted tokens.
    /// If the builder is invalid, a reference to a [`Vec`] of [`ValidationError`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<ValidationError>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let slots = (0..self.tokens.len()).collect_vec();
        let graph = connect(&self.tokens, &slots, &self.config.adjacency);

        Ok(Board {
            tokens: self.tokens.clone(),
            graph,
            target: self.config.target,
            grid: self.config.grid,
            rejected: self.rejected.clone(),
        })
    }
}
