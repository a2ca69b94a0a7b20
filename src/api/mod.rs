pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod search;

use crate::config::Config;
use crate::db::Repository;
use crate::error::AppError;
use axum::{
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }

    pub fn questions_per_page(&self) -> u32 {
        self.config.questions_per_page
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/categories", get(categories::get_categories))
        .route(
            "/categories/:id/questions",
            get(categories::get_category_questions),
        )
        .route(
            "/questions",
            get(questions::get_questions).post(questions::create_question),
        )
        .route("/questions/:id", delete(questions::delete_question))
        .route("/search", post(search::search_questions))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(middleware::map_response(method_not_allowed_as_json)),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("no route".to_string())
}

/// Axum answers a known path with an unrouted method with an empty 405; give it the JSON error body.
async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}
