pub mod error;
pub mod model;
pub mod problem;
pub mod service;

pub use error::{Result, WorksheetError};
pub use model::{ColumnStep, Worksheet, method_steps, walkthrough};
pub use problem::ColumnProblem;
pub use service::WorksheetService;
