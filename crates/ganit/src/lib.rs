//! Main crate for Ganit
//!
//! Application layer over the column arithmetic engine: learner-input
//! validation, solved worksheets with explanations, text rendering and the
//! view state of the addition lesson.

pub mod app;
pub mod config;
pub mod error;
pub mod lesson;
pub mod render;
pub mod worksheet;

// Re-export core types
pub use ganit_core::{
    Cell, ColumnPass, ColumnTrace, Grid, GridError, GridRow, Operand, Operation, PlaceValue,
    compute_grid,
};

// Re-export app types
pub use app::{GanitApp, GanitAppBuilder};

pub use config::GanitConfig;
pub use error::{GanitError, Result as GanitResult};
pub use render::{GridRenderer, RenderOptions, TextRenderer};
pub use worksheet::{ColumnProblem, Worksheet, WorksheetError, WorksheetService};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::GanitApp;
    pub use crate::render::{GridRenderer, RenderOptions};
    pub use ganit_core::{Grid, Operation, compute_grid};
}
