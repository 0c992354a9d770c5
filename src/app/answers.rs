use super::*;
use crate::model::UserAnswer;

impl QuizApp {
    /// Records an edit of the current question's answer. The entry is
    /// overwritten whole and correctness recomputed on every edit, so the
    /// map never holds a stale `is_correct`.
    pub fn record_answer(&mut self, answer: AnswerSlots) {
        let abs = self.current_index();
        let is_correct = self.questions[abs].is_correct(&answer);
        self.session.answers.insert(abs, UserAnswer { answer, is_correct });
    }
}
