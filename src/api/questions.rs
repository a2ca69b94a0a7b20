use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::search::{required_term, run_search, SearchRequest, SearchResponse};
use super::AppState;
use crate::domain::{
    categories_map, lenient, CategoryId, NewQuestion, Page, PageQuery, Question, QuestionId,
};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<CategoryId>,
    pub categories: BTreeMap<CategoryId, String>,
}

/// Body of `POST /questions`. A `searchTerm` turns the request into a search.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub category: Option<CategoryId>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub difficulty: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    pub question: Question,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateOrSearchResponse {
    Created(CreatedResponse),
    Search(SearchResponse),
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub question_id: QuestionId,
    pub total_questions: i64,
}

pub async fn get_questions(
    Query(params): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let page = Page::from_query(&params, state.questions_per_page());

    let questions = state.repo.list_questions(page).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!("questions page {}", page.number)));
    }

    let total_questions = state.repo.count_questions().await?;
    let categories = state.repo.list_categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: categories.first().map(|c| c.id),
        categories: categories_map(&categories),
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<CreateOrSearchResponse>, AppError> {
    let Json(body) = payload?;

    // Any body carrying the key is a search, with `POST /search` error rules.
    if body.get("searchTerm").is_some() {
        let request: SearchRequest = serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let term = required_term(request)?;
        let found = run_search(&state, &term).await?;
        return Ok(Json(CreateOrSearchResponse::Search(found)));
    }

    let request: CreateQuestionRequest =
        serde_json::from_value(body).map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let new = NewQuestion::new(
        request.question,
        request.answer,
        request.category,
        request.difficulty,
    )
    .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    // The foreign key rejects unknown categories; the error maps to 422.
    let question = state.repo.insert_question(new).await?;
    let total_questions = state.repo.count_questions().await?;

    tracing::info!(id = question.id, category = question.category, "Question created");

    Ok(Json(CreateOrSearchResponse::Created(CreatedResponse {
        success: true,
        created: question.id,
        question,
        total_questions,
    })))
}

pub async fn delete_question(
    path: Result<Path<QuestionId>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(question_id) = path?;

    if !state.repo.delete_question(question_id).await? {
        return Err(AppError::NotFound(format!("question {}", question_id)));
    }
    let total_questions = state.repo.count_questions().await?;

    tracing::info!(id = question_id, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        question_id,
        total_questions,
    }))
}
