use super::*;
use std::mem;

impl QuizApp {
    /// Brand-new test-mode session; everything cleared.
    pub fn restart_test(&mut self) {
        self.session = TestState::default();
        self.show_answers = false;
        self.message.clear();
        self.rearm_timer();
    }

    /// Fresh session restricted to the mistakes of the last test pass.
    /// With nothing to review this is a notification, not a state change.
    pub fn start_mistakes_review(&mut self) {
        if self.session.mistake_questions.is_empty() {
            self.message = "У вас нет ошибок для повторения! 🎉".to_owned();
            return;
        }
        let mistakes = mem::take(&mut self.session.mistake_questions);
        self.session = TestState::mistakes_review(mistakes);
        self.show_answers = false;
        self.message.clear();
        self.rearm_timer();
    }
}
