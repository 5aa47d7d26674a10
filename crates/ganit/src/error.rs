//! Error types for ganit crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GanitError {
    #[error("Grid error: {0}")]
    Grid(#[from] ganit_core::GridError),

    #[error("Worksheet error: {0}")]
    Worksheet(#[from] crate::worksheet::WorksheetError),

    #[error("Build error: {0}")]
    Build(String),
}

pub type Result<T> = std::result::Result<T, GanitError>;
