use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use trivia_api::api::{self, AppState};
use trivia_api::config::Config;
use trivia_api::db::{init_db, seed_db};
use trivia_api::Repository;

struct TestApp {
    app: axum::Router,
    repo: Arc<Repository>,
    _temp: TempDir,
}

async fn setup_test_app(seed: bool) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    if seed {
        seed_db(&pool).await.expect("seed_db failed");
    }
    let repo = Arc::new(Repository::new(pool));

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        database_path: db_path,
        questions_per_page: 10,
        seed_database: seed,
    };

    let app = api::create_router(AppState::new(repo.clone(), config));

    TestApp {
        app,
        repo,
        _temp: temp_dir,
    }
}

async fn request(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}

#[tokio::test]
async fn test_get_categories() {
    let test_app = setup_test_app(true).await;

    let (status, body) = request(test_app.app, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_categories"], 6);
    assert_eq!(
        body["categories"],
        json!({
            "1": "science",
            "2": "art",
            "3": "geography",
            "4": "history",
            "5": "entertainment",
            "6": "sports",
        })
    );
}

#[tokio::test]
async fn test_get_categories_empty_table_is_404() {
    let test_app = setup_test_app(false).await;

    let (status, body) = request(test_app.app, "GET", "/categories", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_get_categories_page_past_end_is_404() {
    let test_app = setup_test_app(true).await;

    let (status, body) = request(test_app.app, "GET", "/categories?page=2", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_get_category_questions() {
    let test_app = setup_test_app(true).await;

    let (status, body) = request(test_app.app, "GET", "/categories/1/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], 1);
    assert_eq!(body["total_questions"], 3);

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q["category"] == 1));
}

#[tokio::test]
async fn test_get_category_questions_counts_only_that_category() {
    let test_app = setup_test_app(true).await;
    let total = test_app.repo.count_questions().await.unwrap();

    let (status, body) = request(test_app.app, "GET", "/categories/2/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 4);
    assert!(body["total_questions"].as_i64().unwrap() < total);
}

#[tokio::test]
async fn test_get_category_questions_unknown_category_is_404() {
    let test_app = setup_test_app(true).await;

    let (status, body) = request(test_app.app, "GET", "/categories/1000/questions", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_get_category_questions_non_integer_id_is_404() {
    let test_app = setup_test_app(true).await;

    let (status, body) = request(test_app.app, "GET", "/categories/science/questions", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_get_category_questions_empty_category_is_404() {
    let test_app = setup_test_app(true).await;
    let empty = test_app.repo.insert_category("Music").await.unwrap();

    let (status, body) = request(
        test_app.app,
        "GET",
        &format!("/categories/{}/questions", empty.id),
        None,
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_get_categories_page_zero_is_404() {
    let test_app = setup_test_app(true).await;

    let (status, body) = request(test_app.app, "GET", "/categories?page=0", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}
