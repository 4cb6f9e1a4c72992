use std::collections::HashSet;

use tracing::warn;

use crate::config::ValidationPolicy;
use crate::error::ValidationError;
use crate::solver::Slot;
use crate::token::{Token, TokenIndex};

/// The outcome of offering a token to a [`Validator`] that did not abort.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Admission {
    Accepted,
    Rejected(ValidationError),
}

/// Checks tokens one at a time against the preconditions of a search, remembering indices seen so far.
#[derive(Clone, Debug)]
pub(crate) struct Validator {
    policy: ValidationPolicy,
    seen: HashSet<TokenIndex>,
}

impl Validator {
    pub(crate) fn new(policy: ValidationPolicy) -> Self {
        Self { policy, seen: HashSet::new() }
    }

    /// Offer `token` for inclusion.
    ///
    /// Returns [`Err`] only under [`ValidationPolicy::Abort`].
    pub(crate) fn admit(&mut self, token: &Token) -> Result<Admission, ValidationError> {
        if self.policy == ValidationPolicy::Skip {
            return Ok(Admission::Accepted);
        }

        match self.check(token) {
            Ok(()) => {
                self.seen.insert(token.index);
                Ok(Admission::Accepted)
            }
            Err(reason) if self.policy == ValidationPolicy::Reject => {
                warn!(%reason, "rejecting token");
                Ok(Admission::Rejected(reason))
            }
            Err(reason) => Err(reason),
        }
    }

    fn check(&self, token: &Token) -> Result<(), ValidationError> {
        let index = token.index;

        if !token.value.is_finite() {
            return Err(ValidationError::NonFiniteValue { index, value: token.value });
        }
        if token.value < 0.0 {
            return Err(ValidationError::NegativeValue { index, value: token.value });
        }
        if !token.bbox.is_finite() {
            return Err(ValidationError::NonFiniteBounds { index });
        }
        if !token.bbox.is_well_formed() {
            return Err(ValidationError::InvertedBounds { index });
        }
        if self.seen.contains(&index) {
            return Err(ValidationError::DuplicateIndex { index });
        }

        Ok(())
    }
}

/// Tokens of a slice that survived validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Screened {
    pub(crate) slots: Vec<Slot>,
    pub(crate) rejected: Vec<ValidationError>,
}

/// Validate every token of `tokens` in order.
pub(crate) fn screen(tokens: &[Token], policy: ValidationPolicy) -> Result<Screened, ValidationError> {
    let mut validator = Validator::new(policy);
    let mut screened = Screened { slots: Vec::with_capacity(tokens.len()), rejected: Vec::new() };

    for (slot, token) in tokens.iter().enumerate() {
        match validator.admit(token)? {
            Admission::Accepted => screened.slots.push(slot),
            Admission::Rejected(reason) => screened.rejected.push(reason),
        }
    }

    Ok(screened)
}
