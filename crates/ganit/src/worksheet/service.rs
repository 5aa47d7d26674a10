use ganit_core::{ColumnPass, Grid, Operation};
use tracing::{debug, info};

use super::{ColumnProblem, Result, Worksheet, method_steps, walkthrough};
use crate::config::GanitConfig;

/// Service that validates learner input and solves column worksheets
#[derive(Debug, Clone, Default)]
pub struct WorksheetService {
    config: GanitConfig,
}

impl WorksheetService {
    /// Create a new WorksheetService
    pub fn new(config: GanitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GanitConfig {
        &self.config
    }

    /// Validate raw input into a problem
    pub fn prepare(&self, operation: Operation, left: &str, right: &str) -> Result<ColumnProblem> {
        ColumnProblem::new(operation, left, right, &self.config)
    }

    /// Solve a validated problem
    pub fn solve(&self, problem: ColumnProblem) -> Result<Worksheet> {
        let pass = ColumnPass::compute(
            &problem.left,
            &problem.right,
            problem.operation,
            problem.num_cols,
        )?;
        let grid = Grid::from_pass(&pass, &problem.left, &problem.right);
        debug!(
            operation = %problem.operation,
            num_cols = problem.num_cols,
            overflow = pass.overflow.is_some(),
            "Column pass complete"
        );

        let place_values = match grid.place_values() {
            Ok(labels) => labels,
            Err(e) if !self.config.require_place_values => {
                debug!("Skipping place-value header: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        let answer = grid.result_text();
        info!(
            "Solved {} {} {} = {}",
            problem.left,
            problem.operation.symbol(),
            problem.right,
            answer
        );

        Ok(Worksheet {
            steps: method_steps(problem.operation),
            walkthrough: walkthrough(&pass),
            place_values,
            answer,
            grid,
            problem,
        })
    }

    /// Validate and solve in one go
    pub fn create(&self, operation: Operation, left: &str, right: &str) -> Result<Worksheet> {
        let problem = self.prepare(operation, left, right)?;
        self.solve(problem)
    }
}
