//! Solve command handler

use ganit::{GanitApp, Operation};
use std::io::Write;

use crate::OutputFormat;
use crate::error::CliError;

/// Validate the numbers, solve the worksheet and explain every column
pub fn run_solve(
    app: &GanitApp,
    out: &mut impl Write,
    left: &str,
    right: &str,
    operation: Operation,
    format: OutputFormat,
) -> Result<(), CliError> {
    let worksheet = app.worksheet(operation, left, right)?;

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &worksheet)?;
        writeln!(out)?;
        return Ok(());
    }

    let problem = &worksheet.problem;
    writeln!(
        out,
        "🧮 {} {} {}\n",
        problem.left,
        problem.operation.symbol(),
        problem.right
    )?;
    write!(out, "{}", app.render(&worksheet.grid))?;

    writeln!(out, "\n📋 Method:")?;
    for step in &worksheet.steps {
        writeln!(out, "  {}", step)?;
    }

    writeln!(out, "\n🔍 Column by column:")?;
    for step in &worksheet.walkthrough {
        writeln!(out, "  - {}", step.description)?;
    }

    writeln!(out, "\n✅ Answer: {}", worksheet.answer)?;
    Ok(())
}
