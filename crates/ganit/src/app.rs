//! Application layer for Ganit
//!
//! `GanitApp` ties the worksheet workflow to a renderer so that front-ends
//! (CLI, HTTP API) share one entry point.

use ganit_core::{Grid, GridError, Operation, compute_grid};
use std::sync::Arc;
use tracing::debug;

use crate::config::GanitConfig;
use crate::error::{GanitError, Result};
use crate::lesson::LessonState;
use crate::render::{GridRenderer, RenderOptions, TextRenderer};
use crate::worksheet::{Worksheet, WorksheetService};

/// The main Ganit application
#[derive(Clone)]
pub struct GanitApp {
    worksheets: WorksheetService,
    renderer: Arc<dyn GridRenderer>,
    render_options: RenderOptions,
}

impl GanitApp {
    /// Create a new app with the text renderer
    pub fn new(config: GanitConfig) -> Self {
        Self {
            worksheets: WorksheetService::new(config),
            renderer: Arc::new(TextRenderer),
            render_options: RenderOptions::default(),
        }
    }

    /// Create a new builder
    pub fn builder() -> GanitAppBuilder {
        GanitAppBuilder::new()
    }

    pub fn config(&self) -> &GanitConfig {
        self.worksheets.config()
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Compute a bare grid. `num_cols` defaults to the wider operand.
    ///
    /// While place-value labels are required the grid may not be wider than
    /// `max_columns`.
    pub fn grid(
        &self,
        operation: Operation,
        left: &str,
        right: &str,
        num_cols: Option<usize>,
    ) -> Result<Grid> {
        let num_cols = num_cols.unwrap_or_else(|| left.len().max(right.len()));
        let config = self.config();
        if config.require_place_values && num_cols > config.max_columns {
            return Err(GridError::InvalidColumnCount {
                num_cols,
                reason: format!("at most {} columns are supported", config.max_columns),
            }
            .into());
        }
        debug!(%operation, left, right, num_cols, "Computing grid");
        Ok(compute_grid(left, right, operation, num_cols)?)
    }

    /// Validate input and solve a worksheet
    pub fn worksheet(&self, operation: Operation, left: &str, right: &str) -> Result<Worksheet> {
        Ok(self.worksheets.create(operation, left, right)?)
    }

    /// Solve the column slide of a lesson and mark its grid as shown
    pub fn solve_lesson(&self, lesson: &mut LessonState) -> Result<Worksheet> {
        let worksheet =
            self.worksheet(lesson.topic, &lesson.column_left, &lesson.column_right)?;
        lesson.mark_grid_shown();
        Ok(worksheet)
    }

    /// Render a grid with the app's default options
    pub fn render(&self, grid: &Grid) -> String {
        self.renderer.render(grid, &self.render_options)
    }

    /// Render a grid with caller-supplied options
    pub fn render_with(&self, grid: &Grid, options: &RenderOptions) -> String {
        self.renderer.render(grid, options)
    }
}

impl Default for GanitApp {
    fn default() -> Self {
        Self::new(GanitConfig::default())
    }
}

/// Builder for creating Ganit applications
pub struct GanitAppBuilder {
    config: GanitConfig,
    renderer: Option<Arc<dyn GridRenderer>>,
    render_options: RenderOptions,
}

impl GanitAppBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: GanitConfig::default(),
            renderer: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: GanitConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the renderer
    pub fn renderer(mut self, renderer: impl GridRenderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Set the default render options
    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Build the application
    pub fn build(self) -> Result<GanitApp> {
        self.config
            .validate()
            .map_err(|e| GanitError::Build(e.to_string()))?;

        Ok(GanitApp {
            worksheets: WorksheetService::new(self.config),
            renderer: self.renderer.unwrap_or_else(|| Arc::new(TextRenderer)),
            render_options: self.render_options,
        })
    }
}

impl Default for GanitAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
