//! Arithmetic operations known to the column grid

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Operation selector for a column worksheet
///
/// Only addition and subtraction have column semantics. Multiplication is
/// kept so that its operator glyph can be displayed, but computing a grid for
/// it is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    /// Glyph written in the operator column of the second operand row
    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
        }
    }

    /// Whether a column grid can be computed for this operation
    pub fn is_columnar(&self) -> bool {
        matches!(self, Operation::Addition | Operation::Subtraction)
    }

    /// Name of the intermediate value passed between columns
    pub fn regroup_term(&self) -> &'static str {
        match self {
            Operation::Addition => "carry",
            Operation::Subtraction => "borrow",
            Operation::Multiplication => "carry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Operation::from_str("Addition"), Ok(Operation::Addition));
        assert_eq!(
            Operation::from_str("SUBTRACTION"),
            Ok(Operation::Subtraction)
        );
        assert!(Operation::from_str("division").is_err());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Addition.symbol(), '+');
        assert_eq!(Operation::Subtraction.symbol(), '-');
        assert_eq!(Operation::Multiplication.symbol(), '×');
        assert!(!Operation::Multiplication.is_columnar());
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Operation::Subtraction.to_string(), "subtraction");
    }
}
