use super::*;

impl QuizApp {
    /// End of a test-mode pass: collect every absolute index whose answer
    /// is missing or wrong (ascending by construction) and switch to the
    /// results screen. The only writer of `mistake_questions`.
    pub(super) fn finish_test(&mut self) {
        let mistakes: Vec<usize> = (0..self.questions.len())
            .filter(|i| {
                self.session
                    .answers
                    .get(i)
                    .map(|a| !a.is_correct)
                    .unwrap_or(true)
            })
            .collect();

        log::debug!(
            "test finished: {} of {} wrong or unanswered",
            mistakes.len(),
            self.questions.len()
        );
        self.session.mistake_questions = mistakes;
        self.session.show_results = true;
        self.disarm_timer();
    }

    /// Results are always reported against the full test set, also after
    /// a mistakes pass.
    pub fn results_summary(&self) -> ResultsSummary {
        let total = self.questions.len();
        let correct = total - self.session.mistake_questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (100.0 * correct as f64 / total as f64).round() as u8
        };
        ResultsSummary {
            correct,
            total,
            percentage,
            mistakes: self.session.mistake_questions.len(),
            time_spent: self.session.time_spent,
        }
    }
}
