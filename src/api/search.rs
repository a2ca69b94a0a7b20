use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::{CategoryId, Question};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

pub async fn search_questions(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(request) = payload?;
    let term = required_term(request)?;

    Ok(Json(run_search(&state, &term).await?))
}

pub(crate) fn required_term(request: SearchRequest) -> Result<String, AppError> {
    request
        .search_term
        .ok_or_else(|| AppError::BadRequest("searchTerm is required".to_string()))
}

/// Shared by `POST /search` and the `searchTerm` form of `POST /questions`.
pub(crate) async fn run_search(state: &AppState, term: &str) -> Result<SearchResponse, AppError> {
    let questions = state.repo.search_questions(term).await?;
    tracing::debug!(term = %term, matches = questions.len(), "Question search");

    Ok(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    })
}
