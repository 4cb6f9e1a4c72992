#![warn(missing_docs)]

//! # `fruitbox`
//!
//! A helper for the apple box puzzle and its relatives: a field of numbered tokens is cleared in groups of neighbors
//! whose numbers add up to ten. Given the tokens read off a screenshot, `fruitbox` finds every such group.
//!
//! For a one-off search over a slice of [`Token`]s, call [`find_combinations`].
//! To tune the target or the notion of "neighbor", or to validate input first, use [`find_combinations_with`] or
//! build a [`Board`] with a [`BoardBuilder`] and call [`combinations()`](crate::Board::combinations).
//! A [`HighlightPlan`] turns the result into outlines for an overlay.
//!
//! # Internals
//! Tokens are neighbors if their centers are close; see [`DistanceThreshold`].
//! All neighboring pairs are computed once and stored as an undirected graph over the tokens.
//!
//! A depth-first search then starts a chain at every token and repeatedly steps from the last token of the chain to
//! a neighbor not yet on it, keeping a running sum. A chain is recorded as soon as it reaches the target with at least
//! two tokens and is not grown further; a chain overshooting the target is abandoned.
//! Only the last step has to be between neighbors, so a group may bend around corners and its ends may be far apart.
//!
//! The same group is typically reached many times, from different starting tokens and in different orders.
//! Each group is reduced to its token indices in ascending order (its [`Signature`]) and only the first sighting is kept.

pub use adjacency::{is_adjacent, Adjacency, DistanceThreshold};
pub use board::Board;
pub use builder::BoardBuilder;
pub use config::{GridConfig, SearchConfig, ValidationPolicy};
pub use error::ValidationError;
pub use grid::TokenGrid;
pub use highlight::{ComboHighlight, ComboId, Emphasis, HighlightPlan, HighlightStyle, Palette};
pub use location::{BoundingBox, Point};
pub use signature::{canonicalize, Signature};
pub use solver::{Combination, Findings, MIN_LENGTH};
pub use token::{Token, TokenIndex, TokenRecord, Value};

use itertools::Itertools;

use crate::solver::PathSolver;

pub mod adjacency;
pub(crate) mod board;
pub mod builder;
pub mod config;
pub(crate) mod error;
pub(crate) mod grid;
pub mod highlight;
pub(crate) mod location;
pub(crate) mod signature;
pub(crate) mod solver;
pub(crate) mod token;
pub(crate) mod validate;
#[cfg(feature = "wasm")]
pub mod wasm;

/// Find every group of adjacent tokens in `tokens` summing to ten, using the default [`DistanceThreshold`].
///
/// Tokens are taken as given; use [`find_combinations_with`] to validate them first.
/// Each [`Combination`] lists its tokens in ascending index order and refers back into `tokens`.
pub fn find_combinations(tokens: &[Token]) -> Vec<Combination<'_>> {
    let config = SearchConfig::default();
    let slots = (0..tokens.len()).collect_vec();
    let graph = board::connect(tokens, &slots, &config.adjacency);

    PathSolver::new(tokens, &graph, config.target).solve()
}

/// As [`find_combinations`], with the target, adjacency, and validation given by `config`.
///
/// Under [`ValidationPolicy::Abort`] the first offending token is returned as an error.
/// Under [`ValidationPolicy::Reject`] offending tokens are left out of the search and listed in
/// [`Findings::rejected`].
pub fn find_combinations_with<'t>(tokens: &'t [Token], config: &SearchConfig) -> Result<Findings<'t>, ValidationError> {
    let screened = validate::screen(tokens, config.validation)?;
    let graph = board::connect(tokens, &screened.slots, &config.adjacency);

    Ok(Findings {
        combinations: PathSolver::new(tokens, &graph, config.target).solve(),
        rejected: screened.rejected,
    })
}
