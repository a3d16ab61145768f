//! Display projection of the quiz

use super::machine::{Quiz, QuizState, Rating};

/// Highlight applied to one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    None,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub text: &'static str,
    pub mark: OptionMark,
}

/// A question being answered or revealed
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    /// "3. What type of malicious software..."
    pub heading: String,
    pub options: Vec<OptionView>,
    /// "3 of 12"
    pub progress_text: String,
    /// Share of questions already completed
    pub progress_percent: f64,
    pub button_label: &'static str,
    /// Submit button enabled (an option is selected and not yet revealed)
    pub button_enabled: bool,
    /// Options accept clicks
    pub options_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub rating: Rating,
}

impl ResultsView {
    /// "You answered 9 out of 12 correctly! (75%)"
    pub fn summary(&self) -> String {
        format!(
            "You answered {} out of {} correctly! ({:.0}%)",
            self.score, self.total, self.percentage
        )
    }

    pub fn message(&self) -> &'static str {
        self.rating.message()
    }
}

/// What the quiz area shows
#[derive(Debug, Clone, PartialEq)]
pub enum QuizView {
    NotStarted,
    Question(QuestionView),
    Results(ResultsView),
}

impl Quiz {
    /// Project the current state into what the quiz area shows
    pub fn view(&self) -> QuizView {
        match *self.state() {
            QuizState::NotStarted => QuizView::NotStarted,
            QuizState::ShowingQuestion { index, selected } => {
                let options = self.marked_options(index, |option| {
                    if selected == Some(option) {
                        OptionMark::Selected
                    } else {
                        OptionMark::None
                    }
                });
                QuizView::Question(self.question_view(index, options, selected.is_some(), true))
            }
            QuizState::Answered {
                index, selected, ..
            } => {
                let answer = self.questions()[index].answer;
                let options = self.marked_options(index, |option| {
                    if option == answer {
                        OptionMark::Correct
                    } else if option == selected {
                        OptionMark::Incorrect
                    } else {
                        OptionMark::None
                    }
                });
                QuizView::Question(self.question_view(index, options, false, false))
            }
            QuizState::Results => QuizView::Results(ResultsView {
                score: self.score(),
                total: self.total(),
                percentage: self.percentage(),
                rating: Rating::from_score(self.score()),
            }),
        }
    }

    fn marked_options(&self, index: usize, mark: impl Fn(usize) -> OptionMark) -> Vec<OptionView> {
        self.questions()[index]
            .options
            .iter()
            .enumerate()
            .map(|(option, &text)| OptionView {
                text,
                mark: mark(option),
            })
            .collect()
    }

    fn question_view(
        &self,
        index: usize,
        options: Vec<OptionView>,
        button_enabled: bool,
        options_enabled: bool,
    ) -> QuestionView {
        let number = index + 1;
        let total = self.total();
        QuestionView {
            heading: format!("{}. {}", number, self.questions()[index].text),
            options,
            progress_text: format!("{} of {}", number, total),
            progress_percent: index as f64 / total as f64 * 100.0,
            button_label: if number == total {
                "Finish Quiz"
            } else {
                "Next Question"
            },
            button_enabled,
            options_enabled,
        }
    }
}
