use serde::{Deserialize, Serialize};

use super::SingleDigit;

/// Two groups of objects to be counted together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectGroups {
    first: u8,
    second: u8,
}

impl ObjectGroups {
    pub fn new(first: SingleDigit, second: SingleDigit) -> Self {
        Self {
            first: first.value(),
            second: second.value(),
        }
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn total(&self) -> u8 {
        self.first + self.second
    }

    /// One symbol per object, first group then second group
    pub fn draw(&self, symbol: char) -> (String, String) {
        (
            std::iter::repeat_n(symbol, self.first as usize).collect(),
            std::iter::repeat_n(symbol, self.second as usize).collect(),
        )
    }

    pub fn sentence(&self) -> String {
        format!("{} + {} = {}", self.first, self.second, self.total())
    }
}

/// A hop along the number line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub from: u8,
    pub to: u8,
}

/// Number line from 0 to 20 with two hops: 0 to `first`, then on by `second`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLine {
    first: u8,
    second: u8,
}

impl NumberLine {
    /// Largest tick on the line
    pub const LENGTH: u8 = 20;

    pub fn new(first: SingleDigit, second: SingleDigit) -> Self {
        Self {
            first: first.value(),
            second: second.value(),
        }
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn ticks(&self) -> impl Iterator<Item = u8> {
        0..=Self::LENGTH
    }

    /// Where `value` sits along the line, from 0.0 to 1.0
    pub fn position(value: u8) -> f64 {
        f64::from(value.min(Self::LENGTH)) / f64::from(Self::LENGTH)
    }

    pub fn hops(&self) -> [Hop; 2] {
        [
            Hop {
                from: 0,
                to: self.first,
            },
            Hop {
                from: self.first,
                to: self.end(),
            },
        ]
    }

    pub fn end(&self) -> u8 {
        self.first + self.second
    }

    /// Text drawing of the line with the landing point marked
    pub fn draw(&self) -> String {
        let marks: String = self
            .ticks()
            .map(|tick| {
                if tick == self.end() {
                    'v'
                } else if tick == self.first {
                    '^'
                } else {
                    '|'
                }
            })
            .flat_map(|mark| [mark, '-'])
            .collect();
        let labels: String = self
            .ticks()
            .step_by(5)
            .map(|tick| format!("{:<10}", tick))
            .collect();
        format!("{}\n{}", marks.trim_end_matches('-'), labels.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(first: u8, second: u8) -> (SingleDigit, SingleDigit) {
        (
            SingleDigit::new(first).unwrap(),
            SingleDigit::new(second).unwrap(),
        )
    }

    #[test]
    fn test_object_groups() {
        let (first, second) = digits(5, 3);
        let groups = ObjectGroups::new(first, second);
        assert_eq!(groups.total(), 8);
        assert_eq!(groups.draw('*'), ("*****".to_string(), "***".to_string()));
        assert_eq!(groups.sentence(), "5 + 3 = 8");
    }

    #[test]
    fn test_number_line_hops() {
        let (first, second) = digits(5, 3);
        let line = NumberLine::new(first, second);
        assert_eq!(line.ticks().count(), 21);
        assert_eq!(
            line.hops(),
            [Hop { from: 0, to: 5 }, Hop { from: 5, to: 8 }]
        );
        assert_eq!(NumberLine::position(5), 0.25);
        assert_eq!(NumberLine::position(20), 1.0);
        assert_eq!(NumberLine::position(30), 1.0);
    }

    #[test]
    fn test_largest_inputs_stay_on_the_line() {
        let (first, second) = digits(9, 9);
        assert_eq!(ObjectGroups::new(first, second).total(), 18);

        let line = NumberLine::new(first, second);
        assert_eq!(line.end(), 18);
        assert!(line.end() <= NumberLine::LENGTH);
        assert!(line.draw().starts_with("|-|-|-|-|-|-|-|-|-^-|-|-|-|-|-|-|-|-v-|-|"));
        assert!(SingleDigit::new(10).is_none());
    }

    #[test]
    fn test_number_line_drawing() {
        let (first, second) = digits(2, 1);
        let drawing = NumberLine::new(first, second).draw();
        let first_line = drawing.lines().next().unwrap();
        assert!(first_line.starts_with("|-|-^-v-|"));
        assert_eq!(first_line.chars().filter(|c| *c != '-').count(), 21);
        assert!(drawing.lines().nth(1).unwrap().starts_with("0"));
    }
}
