//! CLI command handlers

pub mod grid;
pub mod lesson;
pub mod place_values;
pub mod solve;

pub use grid::{GridArgs, run_grid};
pub use lesson::{run_number_line, run_objects};
pub use place_values::run_place_values;
pub use solve::run_solve;
