//! Quiz state machine
//!
//! `NotStarted -> ShowingQuestion(i) -> Answered(i) -> ShowingQuestion(i+1) -> ... -> Results`

use super::questions::{Question, OPTIONS_PER_QUESTION, QUESTIONS};
use crate::error::QuizError;
use std::time::Duration;
use tracing::debug;

/// Pause between revealing an answer and showing the next question
pub const ADVANCE_DELAY: Duration = Duration::from_millis(800);

/// Quiz state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    ShowingQuestion {
        index: usize,
        selected: Option<usize>,
    },
    Answered {
        index: usize,
        selected: usize,
        correct: bool,
    },
    Results,
}

impl QuizState {
    fn name(&self) -> &'static str {
        match self {
            QuizState::NotStarted => "not started",
            QuizState::ShowingQuestion { .. } => "showing a question",
            QuizState::Answered { .. } => "revealing an answer",
            QuizState::Results => "showing results",
        }
    }
}

/// Qualitative rating of a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Rating {
    /// Bucket a score out of the 12 built-in questions
    pub fn from_score(score: usize) -> Self {
        match score {
            s if s >= 11 => Rating::Excellent,
            s if s >= 8 => Rating::Good,
            s if s >= 5 => Rating::Fair,
            _ => Rating::NeedsImprovement,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent! You are a Cyber Security Buddy!",
            Rating::Good => "Good! You have a solid understanding of online safety.",
            Rating::Fair => "Fair. Keep learning, and review the safety tips!",
            Rating::NeedsImprovement => {
                "Needs Improvement. Time to hit the 'Learn Safety' section!"
            }
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Rating::Excellent => "rating-excellent",
            Rating::Good => "rating-good",
            Rating::Fair => "rating-fair",
            Rating::NeedsImprovement => "rating-poor",
        }
    }
}

/// A quiz session over a fixed question bank
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: &'static [Question],
    state: QuizState,
    score: usize,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    /// Quiz over the built-in question bank
    pub fn new() -> Self {
        Self::with_questions(&QUESTIONS)
    }

    /// Quiz over a custom question bank
    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self {
            questions,
            state: QuizState::NotStarted,
            score: 0,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Correct answers so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    /// Question currently shown or being revealed
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            QuizState::ShowingQuestion { index, .. } | QuizState::Answered { index, .. } => {
                self.questions.get(index)
            }
            _ => None,
        }
    }

    /// Final rating, once results are reached
    pub fn rating(&self) -> Option<Rating> {
        match self.state {
            QuizState::Results => Some(Rating::from_score(self.score)),
            _ => None,
        }
    }

    /// Score as a percentage of the question count
    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.score as f64 / self.questions.len() as f64 * 100.0
    }

    /// Begin the quiz at the first question
    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.state != QuizState::NotStarted {
            return Err(self.invalid("start"));
        }

        self.score = 0;
        self.state = self.question_or_results(0);
        Ok(())
    }

    /// Record an option for the shown question; may be changed until submit
    pub fn select(&mut self, option: usize) -> Result<(), QuizError> {
        let QuizState::ShowingQuestion { index, .. } = self.state else {
            return Err(self.invalid("select an option"));
        };
        if option >= OPTIONS_PER_QUESTION {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                available: OPTIONS_PER_QUESTION,
            });
        }

        self.state = QuizState::ShowingQuestion {
            index,
            selected: Some(option),
        };
        Ok(())
    }

    /// Reveal correctness of the selected option; returns whether it was correct
    pub fn submit(&mut self) -> Result<bool, QuizError> {
        let (index, selected) = match self.state {
            QuizState::ShowingQuestion {
                index,
                selected: Some(selected),
            } => (index, selected),
            QuizState::ShowingQuestion { selected: None, .. } => {
                return Err(QuizError::NoSelection)
            }
            _ => return Err(self.invalid("submit")),
        };

        let correct = self.questions[index].answer == selected;
        if correct {
            self.score += 1;
        }
        debug!(question = index, selected, correct, "Answer submitted");

        self.state = QuizState::Answered {
            index,
            selected,
            correct,
        };
        Ok(correct)
    }

    /// Move past a revealed answer to the next question or the results
    pub fn advance(&mut self) -> Result<(), QuizError> {
        match self.state {
            QuizState::Answered { index, .. } => {
                self.state = self.question_or_results(index + 1);
                Ok(())
            }
            _ => Err(self.invalid("advance")),
        }
    }

    /// Wait [`ADVANCE_DELAY`], then advance
    pub async fn advance_after_delay(&mut self) -> Result<(), QuizError> {
        if !matches!(self.state, QuizState::Answered { .. }) {
            return Err(self.invalid("advance"));
        }
        tokio::time::sleep(ADVANCE_DELAY).await;
        self.advance()
    }

    /// Reset all quiz state
    pub fn retake(&mut self) {
        self.state = QuizState::NotStarted;
        self.score = 0;
    }

    fn question_or_results(&self, index: usize) -> QuizState {
        if index < self.questions.len() {
            QuizState::ShowingQuestion {
                index,
                selected: None,
            }
        } else {
            QuizState::Results
        }
    }

    fn invalid(&self, action: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
