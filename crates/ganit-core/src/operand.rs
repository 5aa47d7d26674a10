//! Operand parsing and place-value alignment

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::{GridError, Result};

/// A non-negative integer written as decimal digits
///
/// Digits are stored most significant first, exactly as written, so leading
/// zeros typed by the learner are preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operand {
    digits: Vec<u8>,
}

impl Operand {
    /// Parse a digit string. Anything other than ASCII 0-9 is rejected, as is
    /// the empty string.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GridError::invalid_digits(text));
        }

        Ok(Self {
            digits: text.bytes().map(|b| b - b'0').collect(),
        })
    }

    /// Number of digits as written
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits as written, most significant first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Digits without leading zeros. Zero keeps a single digit.
    pub fn significant_digits(&self) -> &[u8] {
        let first = self
            .digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(self.digits.len() - 1);
        &self.digits[first..]
    }

    /// Digits left-padded with zeros to `width`, most significant first.
    /// Callers guarantee `width >= self.len()`.
    pub fn padded(&self, width: usize) -> Vec<u8> {
        let mut padded = vec![0; width.saturating_sub(self.digits.len())];
        padded.extend_from_slice(&self.digits);
        padded
    }

    /// Compare the numeric values of two operands of any length
    pub fn cmp_value(&self, other: &Operand) -> Ordering {
        let a = self.significant_digits();
        let b = other.significant_digits();
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Operand {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(Operand::parse("12a").is_err());
        assert!(Operand::parse("-5").is_err());
        assert!(Operand::parse("1,000").is_err());
        assert!(Operand::parse(" 5").is_err());
        assert!(Operand::parse("").is_err());
    }

    #[test]
    fn test_padding_keeps_alignment_from_the_right() {
        let operand = Operand::parse("59").unwrap();
        assert_eq!(operand.padded(3), vec![0, 5, 9]);
        assert_eq!(operand.padded(2), vec![5, 9]);
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(Operand::parse("0042").unwrap().significant_digits(), &[4, 2]);
        assert_eq!(Operand::parse("000").unwrap().significant_digits(), &[0]);
    }

    #[test]
    fn test_cmp_value_ignores_leading_zeros() {
        let a = Operand::parse("0103").unwrap();
        let b = Operand::parse("59").unwrap();
        assert_eq!(a.cmp_value(&b), Ordering::Greater);
        assert_eq!(b.cmp_value(&a), Ordering::Less);

        let c = Operand::parse("007").unwrap();
        let d = Operand::parse("7").unwrap();
        assert_eq!(c.cmp_value(&d), Ordering::Equal);
    }

    #[test]
    fn test_display_round_trips_written_form() {
        assert_eq!(Operand::parse("0450").unwrap().to_string(), "0450");
    }
}
