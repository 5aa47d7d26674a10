//! Rendering grids for display
//!
//! Renderers never change a grid; all view choices travel in
//! [`RenderOptions`], which the caller owns.

use ganit_core::{Grid, GridRow, PlaceValue};
use serde::{Deserialize, Serialize};

/// View options chosen by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw the place-value header above the grid
    pub show_header: bool,
    /// Draw the rule between the operands and the result
    pub show_divider: bool,
    /// Minimum cell width in characters
    pub cell_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            show_divider: true,
            cell_width: 3,
        }
    }
}

/// Turns a grid into something a presentation layer can show
pub trait GridRenderer: Send + Sync {
    fn render(&self, grid: &Grid, options: &RenderOptions) -> String;
}

/// Plain text renderer with right-aligned cells
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn pad(text: &str, width: usize) -> String {
        format!("{:>width$}", text, width = width)
    }
}

impl GridRenderer for TextRenderer {
    fn render(&self, grid: &Grid, options: &RenderOptions) -> String {
        let text_rows = grid.text_rows();
        // Wider grids than the label table have no header.
        let labels = if options.show_header {
            grid.place_values().ok()
        } else {
            None
        };

        // Borrow markers such as "13" are wider than a digit; keep one space
        // between neighbouring cells.
        let width = text_rows
            .iter()
            .flatten()
            .map(|cell| cell.chars().count())
            .chain(labels.iter().flatten().map(|p| p.abbreviation().len()))
            .max()
            .unwrap_or(1)
            .saturating_add(1)
            .max(options.cell_width);

        let mut lines = Vec::new();

        if let Some(labels) = labels {
            let mut line = Self::pad("", width);
            for label in labels.iter().map(PlaceValue::abbreviation) {
                line.push_str(&Self::pad(label, width));
            }
            lines.push(line);
        }

        for row in GridRow::ALL {
            if row == GridRow::Divider {
                if options.show_divider {
                    lines.push("-".repeat(width * grid.total_cols()));
                }
                continue;
            }
            let line: String = text_rows[row.index()]
                .iter()
                .map(|cell| Self::pad(cell, width))
                .collect();
            lines.push(line);
        }

        let mut out = lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganit_core::{Operation, compute_grid};

    #[test]
    fn test_render_addition() {
        let grid = compute_grid("555", "456", Operation::Addition, 3).unwrap();
        let text = TextRenderer.render(&grid, &RenderOptions::default());
        let expected = [
            "     H  T  O",
            "  1  1  1",
            "     5  5  5",
            "  +  4  5  6",
            "------------",
            "  1  0  1  1",
        ];
        assert_eq!(text, expected.join("\n") + "\n");
    }

    #[test]
    fn test_render_widens_for_regrouped_markers() {
        let grid = compute_grid("103", "59", Operation::Subtraction, 3).unwrap();
        let options = RenderOptions {
            show_header: false,
            show_divider: false,
            cell_width: 2,
        };
        let text = TextRenderer.render(&grid, &options);
        let expected = [
            "        9 13",
            "     0  0  3",
            "  -     5  9",
            "        4  4",
        ];
        assert_eq!(text, expected.join("\n") + "\n");
    }

    #[test]
    fn test_render_skips_header_beyond_label_table() {
        let grid = compute_grid("1234567890", "1", Operation::Addition, 10).unwrap();
        let text = TextRenderer.render(&grid, &RenderOptions::default());
        assert!(!text.contains('O'));
        assert_eq!(text.lines().count(), 5);
    }
}
