//! Grid command handler

use ganit::{GanitApp, Operation, RenderOptions};
use std::io::Write;

use crate::OutputFormat;
use crate::error::CliError;

/// Arguments of `ganit grid`
#[derive(Debug, Clone)]
pub struct GridArgs {
    pub left: String,
    pub right: String,
    pub operation: Operation,
    /// Defaults to the wider operand
    pub num_cols: Option<usize>,
    pub format: OutputFormat,
    pub show_header: bool,
}

impl GridArgs {
    pub fn new(left: impl Into<String>, right: impl Into<String>, operation: Operation) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            operation,
            num_cols: None,
            format: OutputFormat::Text,
            show_header: true,
        }
    }
}

/// Print the bare column grid for two operands
pub fn run_grid(app: &GanitApp, out: &mut impl Write, args: &GridArgs) -> Result<(), CliError> {
    let grid = app.grid(args.operation, &args.left, &args.right, args.num_cols)?;

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &grid)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let options = RenderOptions {
                show_header: args.show_header,
                ..app.render_options().clone()
            };
            write!(out, "{}", app.render_with(&grid, &options))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganit::{GanitError, GridError};

    fn output(args: &GridArgs) -> String {
        let app = GanitApp::default();
        let mut out = Vec::new();
        run_grid(&app, &mut out, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = output(&GridArgs::new("9", "5", Operation::Addition));
        assert_eq!(text, "     O\n  1\n     9\n  +  5\n------\n  1  4\n");
    }

    #[test]
    fn test_text_output_without_header() {
        let args = GridArgs {
            show_header: false,
            ..GridArgs::new("9", "5", Operation::Addition)
        };
        assert_eq!(output(&args), "  1\n     9\n  +  5\n------\n  1  4\n");
    }

    #[test]
    fn test_json_output() {
        let args = GridArgs {
            num_cols: Some(3),
            format: OutputFormat::Json,
            ..GridArgs::new("12", "3", Operation::Addition)
        };
        let value: serde_json::Value = serde_json::from_str(&output(&args)).unwrap();
        assert_eq!(value["num_cols"], 3);
        assert_eq!(value["rows"][2][0]["value"], "+");
    }

    #[test]
    fn test_invalid_digits_surface_as_error() {
        let app = GanitApp::default();
        let mut out = Vec::new();
        let result = run_grid(&app, &mut out, &GridArgs::new("12a", "5", Operation::Addition));
        assert!(matches!(result, Err(CliError::Ganit(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_column_count_beyond_labels_is_refused() {
        let app = GanitApp::default();
        let mut out = Vec::new();
        let args = GridArgs {
            num_cols: Some(10),
            ..GridArgs::new("1", "1", Operation::Addition)
        };
        assert!(matches!(
            run_grid(&app, &mut out, &args),
            Err(CliError::Ganit(GanitError::Grid(
                GridError::InvalidColumnCount { num_cols: 10, .. }
            )))
        ));
    }
}
