use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::token::{Token, TokenIndex};

/// The identity of a combination: its token indices in ascending order.
///
/// Two chains visiting the same tokens in a different order share a signature.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Signature(Vec<TokenIndex>);

impl Signature {
    /// The indices, ascending.
    pub fn indices(&self) -> &[TokenIndex] {
        &self.0
    }
}

impl From<Vec<TokenIndex>> for Signature {
    fn from(mut indices: Vec<TokenIndex>) -> Self {
        indices.sort_unstable();
        Self(indices)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

/// Sort `chain` by token index, returning its signature alongside the sorted tokens.
pub fn canonicalize<'a>(chain: impl IntoIterator<Item = &'a Token>) -> (Signature, Vec<&'a Token>) {
    let sorted = chain.into_iter()
        .sorted_by_key(|token| token.index)
        .collect_vec();

    (Signature(sorted.iter().map(|token| token.index).collect()), sorted)
}

/// Signatures seen so far within one search.
#[derive(Default)]
pub(crate) struct SeenSignatures(HashSet<Signature>);

impl SeenSignatures {
    /// Record `signature`, returning `false` if it had already been recorded.
    pub(crate) fn insert(&mut self, signature: Signature) -> bool {
        self.0.insert(signature)
    }
}
