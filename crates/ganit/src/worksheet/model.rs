use ganit_core::{ColumnPass, ColumnTrace, Grid, Operation, PlaceValue};
use serde::{Deserialize, Serialize};

use super::ColumnProblem;

/// One column of the walkthrough, as a learner would say it aloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStep {
    /// Column index, 0 is the most significant column
    pub index: usize,
    pub place: Option<PlaceValue>,
    pub trace: ColumnTrace,
    pub description: String,
}

/// A solved column problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    pub problem: ColumnProblem,
    pub grid: Grid,
    /// Header labels, most significant first; empty when the grid is wider
    /// than the place-value table
    pub place_values: Vec<PlaceValue>,
    /// General method, the same for every problem of this operation
    pub steps: Vec<String>,
    /// Column by column, ones place first
    pub walkthrough: Vec<ColumnStep>,
    /// Result read from the grid
    pub answer: String,
}

/// The classroom method in four steps
pub fn method_steps(operation: Operation) -> Vec<String> {
    vec![
        "Step 1: Write the numbers one below the other, aligning them by place value."
            .to_string(),
        format!(
            "Step 2: Start with the rightmost column (ones place) and {}.",
            match operation {
                Operation::Subtraction => "subtract the bottom digit from the top digit",
                _ => "add the digits",
            }
        ),
        format!(
            "Step 3: Move to the next column to the left (tens place, hundreds place, etc.), handling any {} values.",
            operation.regroup_term()
        ),
        "Step 4: The final result is the number displayed below the line.".to_string(),
    ]
}

/// Describe every column of a pass, ones place first
pub fn walkthrough(pass: &ColumnPass) -> Vec<ColumnStep> {
    pass.columns
        .iter()
        .rev()
        .map(|trace| ColumnStep {
            index: trace.index,
            place: pass.place_of(trace.index),
            trace: *trace,
            description: describe(pass, trace),
        })
        .collect()
}

fn place_name(pass: &ColumnPass, index: usize) -> String {
    match pass.place_of(index) {
        Some(place) => place.name().to_string(),
        None => format!("column {}", pass.num_cols - index),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn describe(pass: &ColumnPass, trace: &ColumnTrace) -> String {
    let here = capitalize(&place_name(pass, trace.index));
    let next = trace
        .index
        .checked_sub(1)
        .map(|left| format!("the {}", place_name(pass, left)));

    match pass.operation {
        Operation::Subtraction => {
            let top = if trace.carry_in > 0 {
                format!("{} - {} (lent)", trace.top, trace.carry_in)
            } else {
                trace.top.to_string()
            };
            if trace.regrouped() {
                format!(
                    "{}: {} is less than {}, so borrow 1 from {}: {} - {} = {}. Write {}.",
                    here,
                    top,
                    trace.bottom,
                    next.unwrap_or_else(|| "the next column".to_string()),
                    trace.top + 10 - trace.carry_in,
                    trace.bottom,
                    trace.digit,
                    trace.digit
                )
            } else {
                format!(
                    "{}: {} - {} = {}. Write {}.",
                    here, top, trace.bottom, trace.digit, trace.digit
                )
            }
        }
        _ => {
            let sum = trace.top + trace.bottom + trace.carry_in;
            let terms = if trace.carry_in > 0 {
                format!(
                    "{} + {} + {} (carry)",
                    trace.top, trace.bottom, trace.carry_in
                )
            } else {
                format!("{} + {}", trace.top, trace.bottom)
            };
            match (trace.regrouped(), next) {
                (false, _) => format!("{}: {} = {}. Write {}.", here, terms, sum, trace.digit),
                (true, Some(next)) => format!(
                    "{}: {} = {}. Write {} and carry {} to {}.",
                    here, terms, sum, trace.digit, trace.carry_out, next
                ),
                (true, None) => format!(
                    "{}: {} = {}. Write {} and bring the carry {} down as the leading digit.",
                    here, terms, sum, trace.digit, trace.carry_out
                ),
            }
        }
    }
}
