use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use super::AppState;
use crate::domain::{categories_map, CategoryId, Page, PageQuery, Question};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: CategoryId,
}

pub async fn get_categories(
    Query(params): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.repo.list_categories().await?;
    let page = Page::from_query(&params, state.questions_per_page());

    let on_page = page.slice(&categories);
    if on_page.is_empty() {
        return Err(AppError::NotFound(format!(
            "categories page {}",
            page.number
        )));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories_map(on_page),
        total_categories: categories.len(),
    }))
}

pub async fn get_category_questions(
    path: Result<Path<CategoryId>, PathRejection>,
    Query(params): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let Path(category_id) = path?;

    let category = state
        .repo
        .get_category(category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {}", category_id)))?;

    let page = Page::from_query(&params, state.questions_per_page());
    let questions = state
        .repo
        .list_questions_in_category(category.id, page)
        .await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "category {} questions page {}",
            category.id, page.number
        )));
    }

    let total_questions = state.repo.count_questions_in_category(category.id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.id,
    }))
}
