use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many answer slots a matching question expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    Two,
    Three,
}

impl Arity {
    pub fn slot_count(self) -> usize {
        match self {
            Arity::Two => 2,
            Arity::Three => 3,
        }
    }

    /// Slot labels shown to the user (А/Б or А/Б/В).
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Arity::Two => &["А", "Б"],
            Arity::Three => &["А", "Б", "В"],
        }
    }
}

/// Ordered answer slots of a matching question. Slot value 0 means
/// "not chosen yet"; real option values start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u16>", into = "Vec<u16>")]
pub struct AnswerSlots {
    arity: Arity,
    values: [u16; 3],
}

impl AnswerSlots {
    /// All slots unset.
    pub fn empty(arity: Arity) -> Self {
        Self {
            arity,
            values: [0; 3],
        }
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn slot_count(&self) -> usize {
        self.arity.slot_count()
    }

    pub fn get(&self, slot: usize) -> u16 {
        self.values[slot]
    }

    /// A copy with only `slot` replaced by `value`, other slots untouched.
    pub fn with_slot(&self, slot: usize, value: u16) -> Self {
        debug_assert!(slot < self.slot_count());
        let mut next = *self;
        next.values[slot] = value;
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.values[..self.slot_count()].iter().copied()
    }
}

impl TryFrom<Vec<u16>> for AnswerSlots {
    type Error = String;

    fn try_from(v: Vec<u16>) -> Result<Self, Self::Error> {
        let arity = match v.len() {
            2 => Arity::Two,
            3 => Arity::Three,
            n => return Err(format!("expected 2 or 3 answer slots, got {n}")),
        };
        let mut values = [0u16; 3];
        values[..v.len()].copy_from_slice(&v);
        Ok(Self { arity, values })
    }
}

impl From<AnswerSlots> for Vec<u16> {
    fn from(slots: AnswerSlots) -> Self {
        slots.iter().collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchingOption {
    pub label: String,
    pub value: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OptionColumn {
    pub title: String,
    pub items: Vec<MatchingOption>,
}

/// One matching question: assign to each left-column prompt a value from
/// the shared right-column option set. Immutable for the session lifetime.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub left_column: OptionColumn,
    pub right_column: OptionColumn,
    pub correct_answer: AnswerSlots,
}

impl Question {
    pub fn arity(&self) -> Arity {
        self.correct_answer.arity()
    }

    /// Exact element-wise equality against the key, length-aware.
    pub fn is_correct(&self, answer: &AnswerSlots) -> bool {
        answer.arity() == self.arity() && answer.iter().eq(self.correct_answer.iter())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserAnswer {
    pub answer: AnswerSlots,
    pub is_correct: bool,
}

impl UserAnswer {
    /// Per-slot mismatch flags for the comparison view: when the answer is
    /// wrong, exactly the slots whose value differs from the key are
    /// flagged; a correct answer flags nothing.
    pub fn mismatched_slots(&self, key: &AnswerSlots) -> Vec<bool> {
        self.answer
            .iter()
            .enumerate()
            .map(|(slot, value)| !self.is_correct && value != key.get(slot))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizMode {
    #[default]
    Test,
    Mistakes,
}

/// Grid/navigator classification of a question. Derived on every render,
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionStatus {
    Current,
    Unanswered,
    Correct,
    Incorrect,
}

/// The whole quiz session. Replaced wholesale on restart and on entering
/// mistakes review; never partially rebuilt.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TestState {
    /// Cursor into the active sequence (all questions in test mode, the
    /// mistake subset in mistakes mode).
    pub current_question: usize,
    /// Keyed by the absolute question index in both modes.
    pub answers: HashMap<usize, UserAnswer>,
    pub show_results: bool,
    /// Seconds spent answering; frozen once results are shown.
    pub time_spent: u64,
    pub mode: QuizMode,
    /// Absolute indices of missing-or-wrong answers, ascending. Written
    /// only when a test-mode pass finishes.
    pub mistake_questions: Vec<usize>,
}

impl TestState {
    pub fn mistakes_review(mistake_questions: Vec<usize>) -> Self {
        Self {
            mode: QuizMode::Mistakes,
            mistake_questions,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(key: &[u16]) -> Question {
        let items = (1..=3)
            .map(|v| MatchingOption {
                label: format!("вариант {v}"),
                value: v,
            })
            .collect();
        Question {
            id: "q1".into(),
            text: "тест".into(),
            image_url: None,
            left_column: OptionColumn {
                title: "Величина".into(),
                items: vec![],
            },
            right_column: OptionColumn {
                title: "Формула".into(),
                items,
            },
            correct_answer: AnswerSlots::try_from(key.to_vec()).unwrap(),
        }
    }

    #[test]
    fn with_slot_replaces_only_one_slot() {
        let a = AnswerSlots::empty(Arity::Three).with_slot(1, 3);
        assert_eq!(a.get(0), 0);
        assert_eq!(a.get(1), 3);
        assert_eq!(a.get(2), 0);
    }

    #[test]
    fn exact_match_is_correct() {
        let q = question(&[2, 3, 1]);
        let a = AnswerSlots::try_from(vec![2, 3, 1]).unwrap();
        assert!(q.is_correct(&a));
    }

    #[test]
    fn order_matters() {
        let q = question(&[2, 3, 1]);
        let a = AnswerSlots::try_from(vec![2, 1, 3]).unwrap();
        assert!(!q.is_correct(&a));
    }

    #[test]
    fn no_partial_credit_for_unset_slots() {
        let q = question(&[2, 3, 1]);
        let a = AnswerSlots::empty(Arity::Three).with_slot(0, 2);
        assert!(!q.is_correct(&a));
    }

    #[test]
    fn two_slot_questions_compare_two_elements() {
        let q = question(&[3, 1]);
        let a = AnswerSlots::empty(Arity::Two).with_slot(0, 3).with_slot(1, 1);
        assert!(q.is_correct(&a));
    }

    #[test]
    fn arity_mismatch_is_never_correct() {
        let q = question(&[3, 1]);
        let a = AnswerSlots::try_from(vec![3, 1, 2]).unwrap();
        assert!(!q.is_correct(&a));
    }

    #[test]
    fn mismatched_slots_flags_exactly_the_differing_ones() {
        let q = question(&[2, 3, 1]);
        let answer = AnswerSlots::try_from(vec![2, 1, 3]).unwrap();
        let user = UserAnswer {
            answer,
            is_correct: q.is_correct(&answer),
        };
        assert_eq!(
            user.mismatched_slots(&q.correct_answer),
            vec![false, true, true]
        );
    }

    #[test]
    fn correct_answer_flags_no_slots() {
        let q = question(&[2, 3, 1]);
        let answer = AnswerSlots::try_from(vec![2, 3, 1]).unwrap();
        let user = UserAnswer {
            answer,
            is_correct: q.is_correct(&answer),
        };
        assert!(user.mismatched_slots(&q.correct_answer).iter().all(|f| !f));
    }

    #[test]
    fn unset_slots_count_as_mismatches() {
        let q = question(&[2, 3, 1]);
        let answer = AnswerSlots::empty(Arity::Three).with_slot(0, 2);
        let user = UserAnswer {
            answer,
            is_correct: q.is_correct(&answer),
        };
        assert_eq!(
            user.mismatched_slots(&q.correct_answer),
            vec![false, true, true]
        );
    }

    #[test]
    fn slots_reject_bad_lengths() {
        assert!(AnswerSlots::try_from(vec![1]).is_err());
        assert!(AnswerSlots::try_from(vec![1, 2, 3, 1]).is_err());
    }

    #[test]
    fn slots_roundtrip_through_vec() {
        let a = AnswerSlots::try_from(vec![2, 3]).unwrap();
        assert_eq!(Vec::<u16>::from(a), vec![2, 3]);
    }
}
