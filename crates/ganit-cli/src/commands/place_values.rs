//! Place-values command handler

use ganit::PlaceValue;
use std::io::Write;

use crate::error::CliError;

/// List the place-value labels used in grid headers
pub fn run_place_values(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "📋 Place values (ones first):\n")?;
    for position in 0..PlaceValue::COUNT {
        let Some(place) = PlaceValue::from_position(position) else {
            continue;
        };
        writeln!(
            out,
            "  {:>3}  {:<14} 10^{}",
            place.abbreviation(),
            place.name(),
            position
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_places() {
        let mut out = Vec::new();
        run_place_values(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.contains("10^")).count(), 9);
        assert!(text.contains("TTh  ten-thousands  10^4"));
    }
}
