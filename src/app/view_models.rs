use super::*;
use crate::model::{QuestionStatus, UserAnswer};

#[derive(Clone, Copy, Debug)]
pub struct GridCell {
    /// Position in the active sequence (what `go_to_question` takes).
    pub pos: usize,
    /// 1-based original question number (what the button shows).
    pub number: usize,
    pub status: QuestionStatus,
}

#[derive(Clone, Copy, Debug)]
pub struct ResultsSummary {
    pub correct: usize,
    pub total: usize,
    pub percentage: u8,
    pub mistakes: usize,
    pub time_spent: u64,
}

/// One row of the reveal-answers review, always over the original test set.
#[derive(Clone, Debug)]
pub struct ReviewRow {
    pub number: usize,
    pub question_index: usize,
    pub user_answer: Option<UserAnswer>,
    pub is_mistake: bool,
}

impl QuizApp {
    pub fn grid_cells(&self) -> Vec<GridCell> {
        (0..self.total_questions())
            .map(|pos| GridCell {
                pos,
                number: self.question_number(pos),
                status: self.question_status(pos),
            })
            .collect()
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        (0..self.questions.len())
            .map(|i| ReviewRow {
                number: i + 1,
                question_index: i,
                user_answer: self.session.answers.get(&i).copied(),
                is_mistake: self.session.mistake_questions.contains(&i),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use crate::model::QuestionStatus;

    #[test]
    fn grid_cells_show_original_numbers_in_mistakes_mode() {
        let mut app = app_with_questions(4);
        app.record_answer(correct_answer());
        app.go_to_question(1);
        app.record_answer(correct_answer());
        app.go_to_question(3);
        app.next_question();
        app.start_mistakes_review();

        let cells = app.grid_cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].number, 3);
        assert_eq!(cells[1].number, 4);
        assert_eq!(cells[0].status, QuestionStatus::Current);
        assert_eq!(cells[1].status, QuestionStatus::Unanswered);
    }

    #[test]
    fn review_rows_cover_the_whole_test_set() {
        let mut app = app_with_questions(3);
        app.record_answer(wrong_answer());
        app.go_to_question(1);
        app.record_answer(correct_answer());
        app.go_to_question(2);
        app.next_question();

        let rows = app.review_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_mistake);
        assert!(!rows[1].is_mistake);
        assert!(rows[2].is_mistake && rows[2].user_answer.is_none());
    }
}
