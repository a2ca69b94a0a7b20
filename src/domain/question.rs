//! Question record, insert payload and its validation rules.

use serde::Serialize;
use thiserror::Error;

use super::category::CategoryId;

pub type QuestionId = i64;

pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

/// A stored trivia question. Serializes to the shape every route returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("missing field: {0}")]
    Missing(&'static str),
    #[error("difficulty must be between 1 and 5, got {0}")]
    Difficulty(i64),
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

impl NewQuestion {
    /// Validate raw request fields. Text is trimmed; blank text counts as missing.
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        category: Option<CategoryId>,
        difficulty: Option<i64>,
    ) -> Result<Self, QuestionError> {
        let question = non_blank(question).ok_or(QuestionError::Missing("question"))?;
        let answer = non_blank(answer).ok_or(QuestionError::Missing("answer"))?;
        let category = category.ok_or(QuestionError::Missing("category"))?;
        let difficulty = difficulty.ok_or(QuestionError::Missing("difficulty"))?;

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(QuestionError::Difficulty(difficulty));
        }

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<NewQuestion, QuestionError> {
        NewQuestion::new(
            Some("How many colors are there in the rainbow?".into()),
            Some(" 7 colors ".into()),
            Some(1),
            Some(1),
        )
    }

    #[test]
    fn test_valid_question_is_trimmed() {
        let q = valid().unwrap();
        assert_eq!(q.answer, "7 colors");
        assert_eq!(q.category, 1);
    }

    #[test]
    fn test_blank_text_is_missing() {
        let err = NewQuestion::new(Some("Q?".into()), Some("   ".into()), Some(1), Some(1));
        assert_eq!(err, Err(QuestionError::Missing("answer")));

        let err = NewQuestion::new(None, Some("A".into()), Some(1), Some(1));
        assert_eq!(err, Err(QuestionError::Missing("question")));
    }

    #[test]
    fn test_missing_category_and_difficulty() {
        let err = NewQuestion::new(Some("Q?".into()), Some("A".into()), None, Some(1));
        assert_eq!(err, Err(QuestionError::Missing("category")));

        let err = NewQuestion::new(Some("Q?".into()), Some("A".into()), Some(1), None);
        assert_eq!(err, Err(QuestionError::Missing("difficulty")));
    }

    #[test]
    fn test_difficulty_bounds() {
        for d in [0, 6, -1] {
            let err = NewQuestion::new(Some("Q?".into()), Some("A".into()), Some(1), Some(d));
            assert_eq!(err, Err(QuestionError::Difficulty(d)));
        }
        for d in MIN_DIFFICULTY..=MAX_DIFFICULTY {
            assert!(NewQuestion::new(Some("Q?".into()), Some("A".into()), Some(1), Some(d)).is_ok());
        }
    }

    #[test]
    fn test_question_json_shape() {
        let q = valid().unwrap().into_question(42);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 42,
                "question": "How many colors are there in the rainbow?",
                "answer": "7 colors",
                "category": 1,
                "difficulty": 1,
            })
        );
    }
}
