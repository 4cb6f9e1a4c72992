//! Parameters of a search, deserializable from any serde format.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::adjacency::DistanceThreshold;
use crate::token::Value;

/// What to do with tokens that fail validation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantNames, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Trust the token producer and check nothing.
    Skip,
    /// Leave offending tokens out of the search and carry on.
    Reject,
    /// Stop at the first offending token.
    #[default]
    Abort,
}

/// Layout parameters for [`TokenGrid`](crate::grid::TokenGrid).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of one grid cell, in screen units.
    pub cell_size: f64,
    /// Tokens further down are clamped into the last row.
    pub max_rows: usize,
    /// Tokens further right are clamped into the last column.
    pub max_cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            max_rows: 10,
            max_cols: 10,
        }
    }
}

/// Everything a search can be tuned by.
///
/// The defaults reproduce the puzzle as played: groups summing to ten, neighbors within 60 units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The sum every combination must reach.
    pub target: Value,
    /// Which tokens may follow one another.
    pub adjacency: DistanceThreshold,
    /// Applied by [`find_combinations_with`](crate::find_combinations_with) and [`BoardBuilder`](crate::BoardBuilder).
    pub validation: ValidationPolicy,
    /// Only used to draw boards; has no effect on the search.
    pub grid: GridConfig,
}

impl SearchConfig {
    /// Ten, as in the puzzle.
    pub const DEFAULT_TARGET: Value = 10.0;
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: Self::DEFAULT_TARGET,
            adjacency: DistanceThreshold::default(),
            validation: ValidationPolicy::default(),
            grid: GridConfig::default(),
        }
    }
}
