//! # Ganit Core
//!
//! Column arithmetic engine: the classroom "stacked column" method for
//! addition and subtraction, with carries and borrows laid out in a grid.
//!
//! ```
//! use ganit_core::{GridRow, Operation, compute_grid};
//!
//! let grid = compute_grid("555", "456", Operation::Addition, 3).unwrap();
//! assert_eq!(grid.result_text(), "1011");
//! assert_eq!(grid.row(GridRow::Result).len(), 4);
//! ```

pub mod error;
pub mod grid;
pub mod operand;
pub mod operation;
pub mod pass;
pub mod place_value;

pub use error::{GridError, Result};
pub use grid::{Cell, Grid, GridRow, compute_grid};
pub use operand::Operand;
pub use operation::Operation;
pub use pass::{ColumnPass, ColumnTrace};
pub use place_value::PlaceValue;
