//! Numeric digit pass
//!
//! Walks the columns from the ones place leftwards, exactly as a learner does
//! on paper, and records what happened in every column. Nothing here knows
//! about display; the grid layout is derived from this output afterwards.

use serde::{Deserialize, Serialize};

use crate::{GridError, Operand, Operation, PlaceValue, Result};

/// What happened in a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTrace {
    /// Column index, 0 is the most significant column
    pub index: usize,
    /// Digit of the left operand (minuend for subtraction), after padding
    pub top: u8,
    /// Digit of the right operand (subtrahend for subtraction), after padding
    pub bottom: u8,
    /// Carry or borrow received from the column to the right
    pub carry_in: u8,
    /// Digit written below the line
    pub digit: u8,
    /// Carry or borrow handed to the column to the left
    pub carry_out: u8,
}

impl ColumnTrace {
    /// Whether this column produced a carry or took a borrow
    pub fn regrouped(&self) -> bool {
        self.carry_out > 0
    }
}

/// Output of the numeric pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPass {
    pub operation: Operation,
    pub num_cols: usize,
    /// One trace per column, most significant first
    pub columns: Vec<ColumnTrace>,
    /// Final addition carry that becomes an extra leading result digit
    pub overflow: Option<u8>,
}

impl ColumnPass {
    /// Run the digit pass over two operands
    ///
    /// `num_cols` must be at least 1 and at least as wide as both operands.
    /// For subtraction the caller guarantees `left >= right`; a leftover
    /// borrow after the last column is dropped.
    pub fn compute(
        left: &Operand,
        right: &Operand,
        operation: Operation,
        num_cols: usize,
    ) -> Result<Self> {
        if !operation.is_columnar() {
            return Err(GridError::UnsupportedOperation(operation));
        }
        if num_cols == 0 {
            return Err(GridError::invalid_column_count(
                num_cols,
                "at least one column is required",
            ));
        }
        let widest = left.len().max(right.len());
        if widest > num_cols {
            return Err(GridError::invalid_column_count(
                num_cols,
                format!("operands need {} columns", widest),
            ));
        }

        let top = left.padded(num_cols);
        let bottom = right.padded(num_cols);

        let mut columns = Vec::with_capacity(num_cols);
        let mut carry_borrow = 0u8;

        for index in (0..num_cols).rev() {
            let carry_in = carry_borrow;
            let (digit, carry_out) = match operation {
                Operation::Addition => {
                    let sum = top[index] + bottom[index] + carry_in;
                    (sum % 10, sum / 10)
                }
                _ => {
                    let diff = top[index] as i8 - bottom[index] as i8 - carry_in as i8;
                    if diff < 0 {
                        ((diff + 10) as u8, 1)
                    } else {
                        (diff as u8, 0)
                    }
                }
            };
            carry_borrow = carry_out;

            columns.push(ColumnTrace {
                index,
                top: top[index],
                bottom: bottom[index],
                carry_in,
                digit,
                carry_out,
            });
        }
        columns.reverse();

        let overflow = match operation {
            Operation::Addition if carry_borrow > 0 => Some(carry_borrow),
            _ => None,
        };

        Ok(Self {
            operation,
            num_cols,
            columns,
            overflow,
        })
    }

    /// Result digits including any overflow digit, most significant first
    pub fn result_digits(&self) -> Vec<u8> {
        self.overflow
            .into_iter()
            .chain(self.columns.iter().map(|c| c.digit))
            .collect()
    }

    /// Place value of a column, if it is within the labelled table
    pub fn place_of(&self, index: usize) -> Option<PlaceValue> {
        self.num_cols
            .checked_sub(index + 1)
            .and_then(PlaceValue::from_position)
    }

    /// Whether the column at `index` lent one to the column on its right
    pub fn lent(&self, index: usize) -> bool {
        self.operation == Operation::Subtraction
            && self
                .columns
                .get(index + 1)
                .is_some_and(ColumnTrace::regrouped)
    }
}
