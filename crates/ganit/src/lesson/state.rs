use ganit_core::Operation;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{NumberLine, ObjectGroups};

/// Slides of the addition lesson, in teaching order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum Slide {
    /// Counting groups of objects
    Objects,
    /// Hopping along a number line
    NumberLine,
    /// The column method worksheet
    ColumnMethod,
}

impl Slide {
    pub const COUNT: usize = 3;

    pub fn index(&self) -> usize {
        match self {
            Slide::Objects => 0,
            Slide::NumberLine => 1,
            Slide::ColumnMethod => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slide::Objects),
            1 => Some(Slide::NumberLine),
            2 => Some(Slide::ColumnMethod),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Slide::Objects => "Addition with Objects",
            Slide::NumberLine => "Addition with Line",
            Slide::ColumnMethod => "Addition with Column Method",
        }
    }
}

/// A digit typed into a single-digit slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleDigit(u8);

impl SingleDigit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Parse typed text; anything but a number from 0 to 9 is refused
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<u8>().ok().and_then(Self::new)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Caller-owned view state for one lesson
///
/// Nothing in here is global; a presentation layer keeps one value per open
/// lesson and feeds user events into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonState {
    pub topic: Operation,
    pub slide: Slide,
    pub show_explanation: bool,
    pub animation_complete: bool,
    pub show_result: bool,
    pub first: SingleDigit,
    pub second: SingleDigit,
    pub column_left: String,
    pub column_right: String,
    /// Set once a worksheet was computed for the current column inputs
    pub show_grid: bool,
}

impl Default for LessonState {
    fn default() -> Self {
        Self::new(Operation::Addition)
    }
}

impl LessonState {
    pub fn new(topic: Operation) -> Self {
        Self {
            topic,
            slide: Slide::Objects,
            show_explanation: false,
            animation_complete: false,
            show_result: false,
            first: SingleDigit(5),
            second: SingleDigit(3),
            column_left: "555".to_string(),
            column_right: "456".to_string(),
            show_grid: false,
        }
    }

    pub fn is_first(&self) -> bool {
        self.slide.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.slide.index() == Slide::COUNT - 1
    }

    /// Move to the next slide; returns false when already on the last one
    pub fn next(&mut self) -> bool {
        match Slide::from_index(self.slide.index() + 1) {
            Some(slide) => {
                self.go_to(slide);
                true
            }
            None => false,
        }
    }

    /// Move to the previous slide; returns false when already on the first one
    pub fn previous(&mut self) -> bool {
        match self.slide.index().checked_sub(1).and_then(Slide::from_index) {
            Some(slide) => {
                self.go_to(slide);
                true
            }
            None => false,
        }
    }

    fn go_to(&mut self, slide: Slide) {
        self.slide = slide;
        self.animation_complete = false;
        self.show_explanation = false;
    }

    /// "Let's find out": reveal the explanation from the beginning
    pub fn find_out(&mut self) {
        self.show_explanation = true;
        self.animation_complete = false;
        self.show_result = false;
    }

    /// First stage of the explanation finished playing
    pub fn complete_animation(&mut self) {
        if self.show_explanation {
            self.animation_complete = true;
        }
    }

    /// Final stage finished; the sum can be shown
    pub fn reveal_result(&mut self) {
        if self.animation_complete {
            self.show_result = true;
        }
    }

    /// Edit the first single-digit input. Invalid text keeps the old value.
    pub fn set_first(&mut self, text: &str) -> bool {
        self.show_explanation = false;
        match SingleDigit::parse(text) {
            Some(digit) => {
                self.first = digit;
                true
            }
            None => false,
        }
    }

    /// Edit the second single-digit input. Invalid text keeps the old value.
    pub fn set_second(&mut self, text: &str) -> bool {
        self.show_explanation = false;
        match SingleDigit::parse(text) {
            Some(digit) => {
                self.second = digit;
                true
            }
            None => false,
        }
    }

    /// Edit the column inputs; any computed worksheet becomes stale
    pub fn set_column_inputs(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.column_left = left.into();
        self.column_right = right.into();
        self.show_grid = false;
    }

    /// Record that a worksheet was computed for the current column inputs
    pub fn mark_grid_shown(&mut self) {
        self.show_grid = true;
    }

    pub fn objects(&self) -> ObjectGroups {
        ObjectGroups::new(self.first, self.second)
    }

    pub fn number_line(&self) -> NumberLine {
        NumberLine::new(self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stops_at_the_ends() {
        let mut state = LessonState::default();
        assert!(state.is_first());
        assert!(!state.previous());

        assert!(state.next());
        assert_eq!(state.slide, Slide::NumberLine);
        assert!(state.next());
        assert!(state.is_last());
        assert!(!state.next());
        assert_eq!(state.slide, Slide::ColumnMethod);

        assert!(state.previous());
        assert_eq!(state.slide, Slide::NumberLine);
    }

    #[test]
    fn test_changing_slide_resets_explanation() {
        let mut state = LessonState::default();
        state.find_out();
        state.complete_animation();
        assert!(state.animation_complete);

        state.next();
        assert!(!state.show_explanation);
        assert!(!state.animation_complete);
    }

    #[test]
    fn test_result_follows_animation_order() {
        let mut state = LessonState::default();
        state.reveal_result();
        assert!(!state.show_result);

        state.complete_animation();
        assert!(!state.animation_complete);

        state.find_out();
        state.complete_animation();
        state.reveal_result();
        assert!(state.show_result);

        state.find_out();
        assert!(!state.show_result);
    }

    #[test]
    fn test_single_digit_inputs() {
        let mut state = LessonState::default();
        state.find_out();

        assert!(state.set_first("7"));
        assert_eq!(state.first.value(), 7);
        assert!(!state.show_explanation);

        assert!(!state.set_second("12"));
        assert!(!state.set_second("-1"));
        assert!(!state.set_second("x"));
        assert_eq!(state.second.value(), 3);
    }

    #[test]
    fn test_column_inputs_hide_grid() {
        let mut state = LessonState::default();
        state.mark_grid_shown();
        state.set_column_inputs("103", "59");
        assert!(!state.show_grid);
        assert_eq!(state.column_left, "103");
    }

    #[test]
    fn test_slide_names() {
        assert_eq!(Slide::NumberLine.to_string(), "number-line");
        assert_eq!("column-method".parse::<Slide>(), Ok(Slide::ColumnMethod));
        assert_eq!(Slide::Objects.title(), "Addition with Objects");
    }
}
