//! Cyber-security quiz
//!
//! Presents the built-in questions one at a time, reveals the correct answer
//! after each submission and rates the final score.

mod machine;
mod questions;
mod view;

pub use machine::{Quiz, QuizState, Rating, ADVANCE_DELAY};
pub use questions::{Question, OPTIONS_PER_QUESTION, QUESTIONS};
pub use view::{OptionMark, OptionView, QuestionView, QuizView, ResultsView};
