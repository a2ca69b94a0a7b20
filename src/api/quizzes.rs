use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::{lenient, pick_question, CategoryId, Question, QuestionId};
use crate::error::AppError;

/// Sentinel category id the quiz UI sends for "All".
pub const ALL_CATEGORIES: CategoryId = 0;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<CategoryId>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    pub previous_questions: Vec<QuestionId>,
}

pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(request) = payload?;

    let category = match request.quiz_category.as_ref().and_then(|c| c.id) {
        None | Some(ALL_CATEGORIES) => None,
        Some(id) => {
            let category = state
                .repo
                .get_category(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("quiz category {}", id)))?;
            Some(category.id)
        }
    };

    let candidates = state.repo.quiz_candidates(category).await?;
    let question = pick_question(
        &candidates,
        &request.previous_questions,
        &mut rand::thread_rng(),
    );

    tracing::debug!(
        category = ?category,
        label = ?request.quiz_category.as_ref().and_then(|c| c.kind.as_deref()),
        played = request.previous_questions.len(),
        exhausted = question.is_none(),
        "Quiz question drawn"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
        previous_questions: request.previous_questions,
    }))
}
