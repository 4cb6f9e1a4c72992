use petgraph::graphmap::UnGraphMap;
use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::signature::{canonicalize, SeenSignatures, Signature};
use crate::token::{Token, TokenIndex, Value};

/// Position of a token in the slice being searched. Distinct from [`TokenIndex`], which the caller assigns.
pub(crate) type Slot = usize;

/// Chains shorter than this never count, even if a lone token equals the target.
pub const MIN_LENGTH: usize = 2;

/// A group of tokens summing to the target, in ascending [`TokenIndex`] order.
///
/// Combinations borrow the tokens they were found among.
#[derive(Clone, Debug, PartialEq)]
pub struct Combination<'a> {
    signature: Signature,
    tokens: Vec<&'a Token>,
}

impl<'a> Combination<'a> {
    /// The tokens of this combination, in ascending index order.
    pub fn tokens(&self) -> &[&'a Token] {
        &self.tokens
    }

    /// The identity of this combination.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Shorthand for `self.signature().indices()`.
    pub fn indices(&self) -> &[TokenIndex] {
        self.signature.indices()
    }

    /// Number of tokens, at least [`MIN_LENGTH`].
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false` for combinations returned by a search.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The sum of the token values, equal to the target searched for.
    pub fn sum(&self) -> Value {
        self.tokens.iter().map(|token| token.value).sum()
    }

    /// Whether the token with `index` is part of this combination.
    pub fn contains(&self, index: TokenIndex) -> bool {
        self.signature.indices().binary_search(&index).is_ok()
    }
}

/// What a validated search turned up, and which tokens it left out to get there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Findings<'a> {
    /// Each distinct combination, in the order first found.
    pub combinations: Vec<Combination<'a>>,
    /// One reason per token set aside under [`ValidationPolicy::Reject`](crate::ValidationPolicy::Reject).
    pub rejected: Vec<ValidationError>,
}

/// Scratch state for one search; never shared between searches.
struct Search<'t> {
    path: Vec<Slot>,
    on_path: Vec<bool>,
    seen: SeenSignatures,
    found: Vec<Combination<'t>>,
}

impl<'t> Search<'t> {
    fn with_capacity(n: usize) -> Self {
        Self {
            path: Vec::with_capacity(n),
            on_path: vec![false; n],
            seen: SeenSignatures::default(),
            found: Vec::new(),
        }
    }

    #[inline]
    fn push(&mut self, slot: Slot) {
        self.path.push(slot);
        self.on_path[slot] = true;
    }

    #[inline]
    fn pop(&mut self) {
        if let Some(slot) = self.path.pop() {
            self.on_path[slot] = false;
        }
    }

    fn record(&mut self, tokens: &'t [Token]) {
        let (signature, sorted) = canonicalize(self.path.iter().map(move |slot| &tokens[*slot]));
        if self.seen.insert(signature.clone()) {
            trace!(%signature, "found combination");
            self.found.push(Combination { signature, tokens: sorted });
        }
    }
}

/// Depth-first enumeration of every chain of neighboring tokens adding up to `target`.
///
/// Use [`Self::solve`] to run the search.
///
/// # Search
/// Every node of `graph` in turn is the root of a chain. A chain grows only from its most recently added token,
/// to any neighbor (per the edges of `graph`) not already on the chain.
/// Tokens absent from `graph` take no part in the search.
///
/// - Once the running sum equals `target` with at least [`MIN_LENGTH`] tokens, the chain is recorded and
///   this branch ends, even if a zero-valued neighbor could lengthen it without changing the sum.
/// - Once the running sum exceeds `target` the branch is abandoned; values must be non-negative.
///
/// The same group is usually reached from several roots and orders; only its first sighting is kept.
pub struct PathSolver<'t, 'g> {
    tokens: &'t [Token],
    graph: &'g UnGraphMap<Slot, ()>,
    target: Value,
}

impl<'t, 'g> PathSolver<'t, 'g> {
    /// `graph` must have been built over `tokens`, its nodes being positions in `tokens`.
    pub(crate) fn new(tokens: &'t [Token], graph: &'g UnGraphMap<Slot, ()>, target: Value) -> Self {
        Self { tokens, graph, target }
    }

    /// Run the search, returning each distinct combination once.
    ///
    /// Combinations are listed in the order they were first found.
    pub fn solve(&self) -> Vec<Combination<'t>> {
        debug!(tokens = self.graph.node_count(), edges = self.graph.edge_count(), goal = self.target, "starting search");

        let mut search = Search::with_capacity(self.tokens.len());
        for root in self.graph.nodes() {
            search.push(root);
            self.extend(&mut search, self.tokens[root].value);
            search.pop();
        }

        debug!(combinations = search.found.len(), "search finished");
        search.found
    }

    fn extend(&self, search: &mut Search<'t>, sum: Value) {
        if sum == self.target && search.path.len() >= MIN_LENGTH {
            search.record(self.tokens);
            return;
        }
        if sum > self.target {
            return;
        }

        let Some(&last) = search.path.last() else {
            return;
        };

        for next in self.graph.neighbors(last) {
            if search.on_path[next] {
                continue;
            }

            search.push(next);
            self.extend(search, sum + self.tokens[next].value);
            search.pop();
        }
    }
}
