//! Column arithmetic grid
//!
//! The grid is the display form of a [`ColumnPass`]: five rows of cells that a
//! presentation layer can draw as-is. It is always rebuilt from scratch for a
//! given input and never edited afterwards.

use serde::{Deserialize, Serialize};

use crate::{ColumnPass, Operand, Operation, PlaceValue, Result};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Blank,
    /// Operand or result digit
    Digit(u8),
    /// Carry value, or regrouped minuend value after a borrow
    Marker(u8),
    /// Operator glyph
    Operator(char),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    /// Text drawn for the cell; blank cells render as an empty string
    pub fn text(&self) -> String {
        match self {
            Cell::Blank => String::new(),
            Cell::Digit(d) | Cell::Marker(d) => d.to_string(),
            Cell::Operator(c) => c.to_string(),
        }
    }
}

/// Logical rows of the grid, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridRow {
    CarryBorrow,
    Top,
    Bottom,
    Divider,
    Result,
}

impl GridRow {
    pub const ALL: [GridRow; 5] = [
        GridRow::CarryBorrow,
        GridRow::Top,
        GridRow::Bottom,
        GridRow::Divider,
        GridRow::Result,
    ];

    pub fn index(&self) -> usize {
        match self {
            GridRow::CarryBorrow => 0,
            GridRow::Top => 1,
            GridRow::Bottom => 2,
            GridRow::Divider => 3,
            GridRow::Result => 4,
        }
    }
}

/// Five rows by `num_cols + 1` columns; column 0 holds the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    operation: Operation,
    num_cols: usize,
    rows: Vec<Vec<Cell>>,
}

/// Compute the grid for two digit strings
///
/// Fails with `InvalidDigits` when an operand is not made of ASCII digits and
/// with `InvalidColumnCount` when `num_cols` is zero or narrower than an
/// operand. Subtraction assumes `left >= right`.
pub fn compute_grid(
    left: &str,
    right: &str,
    operation: Operation,
    num_cols: usize,
) -> Result<Grid> {
    let left = Operand::parse(left)?;
    let right = Operand::parse(right)?;
    let pass = ColumnPass::compute(&left, &right, operation, num_cols)?;
    Ok(Grid::from_pass(&pass, &left, &right))
}

impl Grid {
    /// Lay out a finished digit pass
    ///
    /// Only reads `pass`; the borrow adjustments on the top row are derived
    /// from which columns regrouped.
    pub fn from_pass(pass: &ColumnPass, left: &Operand, right: &Operand) -> Self {
        let num_cols = pass.num_cols;
        let total_cols = num_cols + 1;
        let mut rows = vec![vec![Cell::Blank; total_cols]; GridRow::ALL.len()];

        let top_start = num_cols - left.len().min(num_cols);
        let bottom_start = num_cols - right.len().min(num_cols);

        for trace in &pass.columns {
            let i = trace.index;
            let col = i + 1;

            match pass.operation {
                Operation::Subtraction => {
                    let lent = pass.lent(i);
                    if trace.regrouped() {
                        rows[GridRow::CarryBorrow.index()][col] =
                            Cell::Marker(trace.top + 10 - u8::from(lent));
                    }
                    if i >= top_start {
                        let shown = if lent && trace.top > 0 {
                            trace.top - 1
                        } else {
                            trace.top
                        };
                        rows[GridRow::Top.index()][col] = Cell::Digit(shown);
                    }
                }
                _ => {
                    if trace.regrouped() {
                        rows[GridRow::CarryBorrow.index()][col - 1] =
                            Cell::Marker(trace.carry_out);
                    }
                    if i >= top_start {
                        rows[GridRow::Top.index()][col] = Cell::Digit(trace.top);
                    }
                }
            }

            if i >= bottom_start {
                rows[GridRow::Bottom.index()][col] = Cell::Digit(trace.bottom);
            }
        }

        rows[GridRow::Bottom.index()][0] = Cell::Operator(pass.operation.symbol());

        let result = pass.result_digits();
        let first_shown = result
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(result.len() - 1);
        let offset = total_cols - result.len();
        for (k, digit) in result.into_iter().enumerate().skip(first_shown) {
            rows[GridRow::Result.index()][offset + k] = Cell::Digit(digit);
        }

        Self {
            operation: pass.operation,
            num_cols,
            rows,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Number of digit columns, excluding the operator column
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of columns including the operator column
    pub fn total_cols(&self) -> usize {
        self.num_cols + 1
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, row: GridRow) -> &[Cell] {
        &self.rows[row.index()]
    }

    pub fn cell(&self, row: GridRow, col: usize) -> Option<Cell> {
        self.rows[row.index()].get(col).copied()
    }

    /// Result row read left to right, skipping blanks
    pub fn result_text(&self) -> String {
        self.row(GridRow::Result)
            .iter()
            .map(Cell::text)
            .collect::<Vec<_>>()
            .concat()
    }

    /// Every row as text cells, in row order
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::text).collect())
            .collect()
    }

    /// Place-value header for the digit columns, most significant first
    ///
    /// Fails when the grid is wider than the label table.
    pub fn place_values(&self) -> Result<Vec<PlaceValue>> {
        PlaceValue::header(self.num_cols)
    }
}
