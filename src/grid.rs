use itertools::Itertools;
use ndarray::Array2;

use crate::config::GridConfig;
use crate::location::Coord;
use crate::solver::Slot;
use crate::token::Token;

/// Tokens arranged into rows and columns by where they sit on screen.
///
/// Each token lands in the cell containing its top left corner, with coordinates past the last row or column
/// clamped into it. A later token overwrites an earlier one in the same cell.
/// Rows and columns left entirely empty are then dropped, so the grid is as compact as the layout allows.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenGrid {
    cells: Array2<Option<Slot>>,
}

impl TokenGrid {
    /// Lay out `tokens`; cells hold positions in `tokens`.
    pub fn layout(tokens: &[Token], config: &GridConfig) -> Self {
        if tokens.is_empty() || config.max_rows == 0 || config.max_cols == 0 {
            return Self { cells: Array2::from_elem((0, 0), None) };
        }

        let mut cells = Array2::from_elem((config.max_rows, config.max_cols), None);
        for (slot, token) in tokens.iter().enumerate() {
            let row = cell_of(token.bbox.y0, config.cell_size, config.max_rows);
            let col = cell_of(token.bbox.x0, config.cell_size, config.max_cols);
            cells[(row, col)] = Some(slot);
        }

        Self { cells: trim(&cells) }
    }

    /// Rows left after trimming.
    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    /// Columns left after trimming.
    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    /// The token position at `(row, col)` of the trimmed grid, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<Slot> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Draw one character per cell.
    pub fn render(&self, mut display: impl FnMut(Option<Slot>) -> char) -> String {
        print(self.cells.map(|cell| display(*cell)))
    }
}

fn cell_of(coord: Coord, cell_size: Coord, cells: usize) -> usize {
    // NaN and negative coordinates saturate to the first cell
    ((coord / cell_size).floor() as usize).min(cells - 1)
}

fn trim(cells: &Array2<Option<Slot>>) -> Array2<Option<Slot>> {
    let rows = cells.rows().into_iter()
        .positions(|row| row.iter().any(Option::is_some))
        .collect_vec();
    let cols = cells.columns().into_iter()
        .positions(|col| col.iter().any(Option::is_some))
        .collect_vec();

    Array2::from_shape_fn((rows.len(), cols.len()), |(r, c)| cells[(rows[r], cols[c])])
}

fn print(board: Array2<char>) -> String {
    let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

    for row in board.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}
