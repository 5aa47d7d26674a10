use ganit_core::{GridError, Operation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorksheetError {
    #[error("Please enter both numbers to calculate")]
    MissingOperand,

    #[error("Please enter valid numbers: {0:?} is not a whole number")]
    InvalidNumber(String),

    #[error("For subtraction, the first number must be greater than or equal to the second number")]
    SubtractionUnderflow,

    #[error("Numbers need {needed} columns but at most {max} are supported")]
    TooManyColumns { needed: usize, max: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(Operation),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, WorksheetError>;
