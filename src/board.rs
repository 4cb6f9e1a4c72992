use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::adjacency::Adjacency;
use crate::config::GridConfig;
use crate::error::ValidationError;
use crate::grid::TokenGrid;
use crate::solver::{Combination, PathSolver, Slot};
use crate::token::{Token, TokenIndex, Value};

/// Shown for a cell belonging to more than one combination.
const SHARED_DISPLAY: char = '+';
const EMPTY_DISPLAY: char = '.';
const COMBO_DISPLAYS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Join every pair of `slots` that `rule` considers adjacent.
///
/// Every slot becomes a node, including those without neighbors.
pub(crate) fn connect<A>(tokens: &[Token], slots: &[Slot], rule: &A) -> UnGraphMap<Slot, ()>
where
    A: Adjacency + ?Sized,
{
    let mut graph = UnGraphMap::with_capacity(slots.len(), slots.len());
    for slot in slots {
        graph.add_node(*slot);
    }

    for (a, b) in slots.iter().tuple_combinations() {
        if rule.is_adjacent(&tokens[*a], &tokens[*b]) {
            graph.add_edge(*a, *b, ());
        }
    }

    graph
}

/// A set of validated tokens and the adjacency between them, ready to be searched.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder).
pub struct Board {
    pub(crate) tokens: Vec<Token>,
    pub(crate) graph: UnGraphMap<Slot, ()>,
    pub(crate) target: Value,
    pub(crate) grid: GridConfig,
    pub(crate) rejected: Vec<ValidationError>,
}

impl Board {
    /// The accepted tokens, in the order they were added.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Reasons for each token left out while building under [`ValidationPolicy::Reject`](crate::ValidationPolicy::Reject).
    pub fn rejected(&self) -> &[ValidationError] {
        &self.rejected
    }

    /// Find every group of adjacent tokens summing to the target, deferring to a [`PathSolver`].
    pub fn combinations(&self) -> Vec<Combination<'_>> {
        PathSolver::new(&self.tokens, &self.graph, self.target).solve()
    }

    /// Every pair of tokens close enough to be chained, by index.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = UnorderedPair<TokenIndex>> + '_ {
        self.graph.all_edges()
            .map(|(a, b, _)| UnorderedPair(self.tokens[a].index, self.tokens[b].index))
    }

    /// Whether the tokens with indices `a` and `b` are both on this board and neighbors.
    pub fn are_adjacent(&self, a: TokenIndex, b: TokenIndex) -> bool {
        match (self.slot_of(a), self.slot_of(b)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    fn slot_of(&self, index: TokenIndex) -> Option<Slot> {
        self.tokens.iter().position(|token| token.index == index)
    }

    /// Lay the tokens out according to the board's [`GridConfig`].
    pub fn grid(&self) -> TokenGrid {
        TokenGrid::layout(&self.tokens, &self.grid)
    }

    /// Draw the grid with each token replaced by the letter of the combination it belongs to.
    ///
    /// The `n`th combination of `combinations` is drawn with the `n`th letter of the alphabet, wrapping after `Z`.
    /// Tokens in several combinations are drawn as `+`; tokens in none as `.`.
    pub fn render_combinations(&self, combinations: &[Combination]) -> String {
        self.grid().render(|cell| match cell {
            None => EMPTY_DISPLAY,
            Some(slot) => {
                let index = self.tokens[slot].index;
                let mut owners = combinations.iter().positions(|combo| combo.contains(index));
                match (owners.next(), owners.next()) {
                    (None, _) => EMPTY_DISPLAY,
                    (Some(only), None) => COMBO_DISPLAYS[only % COMBO_DISPLAYS.len()],
                    (Some(_), Some(_)) => SHARED_DISPLAY,
                }
            }
        })
    }
}

fn value_display(value: Value) -> char {
    if value.fract() == 0.0 && (0.0..10.0).contains(&value) {
        char::from_digit(value as u32, 10).unwrap_or('?')
    } else {
        '?'
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid().render(|cell| match cell {
            Some(slot) => value_display(self.tokens[slot].value),
            None => EMPTY_DISPLAY,
        }))
    }
}
