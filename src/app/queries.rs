use super::*;
use crate::model::QuestionStatus;

impl QuizApp {
    /// Length of the active sequence: the full set in test mode, the
    /// mistake subset in mistakes mode.
    pub fn total_questions(&self) -> usize {
        match self.session.mode {
            QuizMode::Test => self.questions.len(),
            QuizMode::Mistakes => self.session.mistake_questions.len(),
        }
    }

    /// Translates a position in the active sequence to the absolute
    /// question index. `session.answers` is keyed by the result in both
    /// modes; this is the only place the translation happens.
    pub fn absolute_index(&self, pos: usize) -> usize {
        match self.session.mode {
            QuizMode::Test => pos,
            QuizMode::Mistakes => self.session.mistake_questions[pos],
        }
    }

    /// 1-based number shown to the user; always the original test-set
    /// number, also in mistakes mode.
    pub fn question_number(&self, pos: usize) -> usize {
        self.absolute_index(pos) + 1
    }

    /// Navigator classification. Pure, recomputed on every render.
    pub fn question_status(&self, pos: usize) -> QuestionStatus {
        if pos == self.session.current_question {
            return QuestionStatus::Current;
        }
        match self.session.answers.get(&self.absolute_index(pos)) {
            None => QuestionStatus::Unanswered,
            Some(a) if a.is_correct => QuestionStatus::Correct,
            Some(_) => QuestionStatus::Incorrect,
        }
    }

    pub fn on_last_question(&self) -> bool {
        self.session.current_question + 1 >= self.total_questions()
    }
}

/// `m:ss`, minutes unbounded.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn status_tracks_cursor_and_answers() {
        let mut app = app_with_questions(3);
        app.record_answer(correct_answer());
        app.next_question();
        app.record_answer(wrong_answer());

        assert_eq!(app.question_status(0), QuestionStatus::Correct);
        assert_eq!(app.question_status(1), QuestionStatus::Current);
        assert_eq!(app.question_status(2), QuestionStatus::Unanswered);
    }

    #[test]
    fn mistakes_mode_translates_to_absolute_indices() {
        let mut app = app_with_questions(4);
        // Answer 0 and 2 correctly, finish: mistakes are [1, 3].
        app.record_answer(correct_answer());
        app.go_to_question(2);
        app.record_answer(correct_answer());
        app.go_to_question(3);
        app.next_question();
        assert_eq!(app.session.mistake_questions, vec![1, 3]);

        app.start_mistakes_review();
        assert_eq!(app.total_questions(), 2);
        assert_eq!(app.absolute_index(0), 1);
        assert_eq!(app.absolute_index(1), 3);
        assert_eq!(app.question_number(1), 4);

        // Recording at position 0 must land on absolute index 1.
        app.record_answer(wrong_answer());
        assert!(app.session.answers.contains_key(&1));
        assert!(!app.session.answers.contains_key(&0));
        assert_eq!(app.question_status(1), QuestionStatus::Unanswered);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(600), "10:00");
    }
}
