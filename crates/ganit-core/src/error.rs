//! Error types for ganit-core

use thiserror::Error;

use crate::Operation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid digits in operand {operand:?}: only 0-9 are allowed")]
    InvalidDigits { operand: String },

    #[error("Invalid column count {num_cols}: {reason}")]
    InvalidColumnCount { num_cols: usize, reason: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(Operation),
}

impl GridError {
    pub(crate) fn invalid_digits(operand: &str) -> Self {
        Self::InvalidDigits {
            operand: operand.to_string(),
        }
    }

    pub(crate) fn invalid_column_count(num_cols: usize, reason: impl Into<String>) -> Self {
        Self::InvalidColumnCount {
            num_cols,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
