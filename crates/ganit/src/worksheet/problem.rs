use ganit_core::{Operand, Operation};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Result, WorksheetError};
use crate::config::GanitConfig;

/// A validated column problem, ready to be laid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProblem {
    pub operation: Operation,
    pub left: Operand,
    pub right: Operand,
    /// Width of the widest operand
    pub num_cols: usize,
}

impl ColumnProblem {
    /// Validate learner input the way the worksheet form does
    ///
    /// Both fields must be filled in with whole numbers, subtraction needs
    /// the first number to be at least the second, and the worksheet must
    /// fit the configured column limit.
    pub fn new(
        operation: Operation,
        left: &str,
        right: &str,
        config: &GanitConfig,
    ) -> Result<Self> {
        let left = left.trim();
        let right = right.trim();

        if left.is_empty() || right.is_empty() {
            return Err(WorksheetError::MissingOperand);
        }

        let left_operand =
            Operand::parse(left).map_err(|_| WorksheetError::InvalidNumber(left.to_string()))?;
        let right_operand =
            Operand::parse(right).map_err(|_| WorksheetError::InvalidNumber(right.to_string()))?;

        if !operation.is_columnar() {
            return Err(WorksheetError::UnsupportedOperation(operation));
        }

        if operation == Operation::Subtraction
            && left_operand.cmp_value(&right_operand) == Ordering::Less
        {
            return Err(WorksheetError::SubtractionUnderflow);
        }

        let num_cols = left_operand.len().max(right_operand.len());
        if config.require_place_values && num_cols > config.max_columns {
            return Err(WorksheetError::TooManyColumns {
                needed: num_cols,
                max: config.max_columns,
            });
        }

        Ok(Self {
            operation,
            left: left_operand,
            right: right_operand,
            num_cols,
        })
    }
}
