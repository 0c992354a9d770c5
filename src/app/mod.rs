use crate::data::read_questions_embedded;
use crate::model::{AnswerSlots, Question, QuizMode, TestState};

// Submodules, one concern each
pub mod answers;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod scoring;
pub mod timer;
pub mod view_models;

pub use view_models::{GridCell, ResultsSummary, ReviewRow};

pub struct QuizApp {
    /// The full test set, read-only for the session lifetime.
    pub questions: Vec<Question>,
    /// Current session; replaced wholesale on restart / mistakes review.
    pub session: TestState,
    /// Results screen: reveal-answers toggle.
    pub show_answers: bool,
    /// One-line notification shown under the controls.
    pub message: String,
    /// Clock instant the timer last ticked from (fractional seconds of
    /// egui's clock); None while the timer is disarmed (results shown, or
    /// before the first answering frame).
    pub tick_baseline: Option<f64>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_questions(read_questions_embedded())
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            session: TestState::default(),
            show_answers: false,
            message: String::new(),
            tick_baseline: None,
        }
    }

    /// Absolute index of the question under the cursor.
    pub fn current_index(&self) -> usize {
        self.absolute_index(self.session.current_question)
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index()]
    }

    /// The tuple the user is editing: the recorded answer for the current
    /// question, or all-unset slots of the right arity.
    pub fn working_answer(&self) -> AnswerSlots {
        let abs = self.current_index();
        self.session
            .answers
            .get(&abs)
            .map(|a| a.answer)
            .unwrap_or_else(|| AnswerSlots::empty(self.questions[abs].arity()))
    }

    pub fn in_mistakes_mode(&self) -> bool {
        self.session.mode == QuizMode::Mistakes
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::model::{MatchingOption, OptionColumn};

    /// A bank of `n` three-slot questions, all keyed [1, 2, 3].
    pub fn app_with_questions(n: usize) -> QuizApp {
        let questions = (0..n)
            .map(|i| Question {
                id: format!("q{i}"),
                text: format!("вопрос {i}"),
                image_url: None,
                left_column: OptionColumn {
                    title: "А".into(),
                    items: (1..=3)
                        .map(|v| MatchingOption {
                            label: format!("промпт {v}"),
                            value: v,
                        })
                        .collect(),
                },
                right_column: OptionColumn {
                    title: "Б".into(),
                    items: (1..=3)
                        .map(|v| MatchingOption {
                            label: format!("вариант {v}"),
                            value: v,
                        })
                        .collect(),
                },
                correct_answer: AnswerSlots::try_from(vec![1, 2, 3]).unwrap(),
            })
            .collect();
        QuizApp::with_questions(questions)
    }

    pub fn correct_answer() -> AnswerSlots {
        AnswerSlots::try_from(vec![1, 2, 3]).unwrap()
    }

    pub fn wrong_answer() -> AnswerSlots {
        AnswerSlots::try_from(vec![3, 2, 1]).unwrap()
    }
}
