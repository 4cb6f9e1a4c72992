//! Deciding which tokens count as neighbors.

use serde::{Deserialize, Serialize};

use crate::location::Coord;
use crate::token::Token;

/// A proximity rule deciding which tokens may follow one another in a chain.
///
/// [`DistanceThreshold`] is the built-in implementation.
/// Implementations must be symmetric; the search stores the relation as an undirected graph.
pub trait Adjacency {
    /// Whether `a` and `b` are close enough to be neighbors.
    fn is_adjacent(&self, a: &Token, b: &Token) -> bool;
}

/// Neighbors are tokens whose centers are within `threshold` of each other in a straight line,
/// or within `threshold * manhattan_factor` when walking along the axes.
///
/// Taking the looser of the two metrics lets tokens laid out in rows and columns reach further than
/// diagonal ones, which tolerates sloppy bounding boxes from upstream.
/// Both comparisons are strict.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceThreshold {
    /// Exclusive upper bound on the straight-line distance between centers.
    pub threshold: Coord,
    /// Multiplier applied to `threshold` for the taxicab distance.
    pub manhattan_factor: Coord,
}

impl DistanceThreshold {
    /// Roughly one token's width plus spacing in the puzzle as usually rendered.
    pub const DEFAULT_THRESHOLD: Coord = 60.0;
    /// Lets a token two cells away along a row or column still reach.
    pub const DEFAULT_MANHATTAN_FACTOR: Coord = 1.5;

    /// A rule with the given straight-line threshold and taxicab multiplier.
    pub fn new(threshold: Coord, manhattan_factor: Coord) -> Self {
        Self { threshold, manhattan_factor }
    }

    #[inline]
    fn manhattan_limit(&self) -> Coord {
        self.threshold * self.manhattan_factor
    }
}

impl Default for DistanceThreshold {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_MANHATTAN_FACTOR)
    }
}

impl Adjacency for DistanceThreshold {
    fn is_adjacent(&self, a: &Token, b: &Token) -> bool {
        let (ca, cb) = (a.bbox.center(), b.bbox.center());

        ca.euclidean_to(cb) < self.threshold || ca.manhattan_to(cb) < self.manhattan_limit()
    }
}

impl<F> Adjacency for F
where
    F: Fn(&Token, &Token) -> bool,
{
    fn is_adjacent(&self, a: &Token, b: &Token) -> bool {
        self(a, b)
    }
}

/// [`DistanceThreshold::default`] applied to `a` and `b`.
pub fn is_adjacent(a: &Token, b: &Token) -> bool {
    DistanceThreshold::default().is_adjacent(a, b)
}
