pub mod state;
pub mod visuals;

pub use state::{LessonState, SingleDigit, Slide};
pub use visuals::{Hop, NumberLine, ObjectGroups};
