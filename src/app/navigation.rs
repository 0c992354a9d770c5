use super::*;

impl QuizApp {
    /// Advance the cursor. From the last position of the active sequence:
    /// in test mode compute the mistake list and show results; in mistakes
    /// mode just show results (the list is kept from the test pass).
    pub fn next_question(&mut self) {
        if !self.on_last_question() {
            self.session.current_question += 1;
            return;
        }
        match self.session.mode {
            QuizMode::Test => self.finish_test(),
            QuizMode::Mistakes => {
                self.session.show_results = true;
                self.disarm_timer();
            }
        }
    }

    /// Go back one question; silent no-op at the first one.
    pub fn prev_question(&mut self) {
        if self.session.current_question > 0 {
            self.session.current_question -= 1;
        }
    }

    /// Jump to a position in the active sequence (question-grid clicks).
    /// The grid only offers valid positions; anything else is rejected.
    pub fn go_to_question(&mut self, pos: usize) {
        if pos >= self.total_questions() {
            log::warn!(
                "go_to_question({pos}) out of range, sequence has {} questions",
                self.total_questions()
            );
            return;
        }
        self.session.current_question = pos;
    }
}
