//! Router-level tests against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia_core::{MemoryStore, NewQuestion, QuestionStore};
use trivia_server::{build_router, cors_layer, AppState, ServerConfig};

const SEED: [(&str, &str, i32, i32); 4] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Which Dutch graphic artist is known for impossible constructions?", "Escher", 2, 1),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
];

async fn store_with(count: usize) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::with_default_categories());
    for i in 0..count {
        let (q, a, cat, diff) = SEED[i % SEED.len()];
        store
            .insert(NewQuestion::new(q, a, cat, diff).unwrap())
            .await
            .unwrap();
    }
    store
}

fn app(store: Arc<MemoryStore>) -> Router {
    let config = ServerConfig::default();
    build_router(AppState::new(store), cors_layer(&config).unwrap())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn assert_error(body: &Value, code: u16) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn health_endpoint() {
    let app = app(store_with(0).await);
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["categories"], 6);
}

#[tokio::test]
async fn lists_categories_as_map() {
    let app = app(store_with(0).await);
    let (status, body) = send(&app, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
}

#[tokio::test]
async fn paginates_questions() {
    let app = app(store_with(15).await);

    let (status, body) = send(&app, "GET", "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], 15);
    assert_eq!(body["current_category"], Value::Null);
    assert_eq!(body["categories"]["2"], "Art");

    let (status, body) = send(&app, "GET", "/questions?page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0]["id"], 11);
}

#[tokio::test]
async fn non_numeric_page_falls_back_to_first() {
    let app = app(store_with(3).await);
    let (status, body) = send(&app, "GET", "/questions?page=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"][0]["id"], 1);
}

#[tokio::test]
async fn page_past_end_is_404() {
    let app = app(store_with(3).await);
    let (status, body) = send(&app, "GET", "/questions?page=1000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404);
}

#[tokio::test]
async fn page_beyond_u32_is_404() {
    let app = app(store_with(3).await);
    let (status, body) = send(&app, "GET", "/questions?page=4294967296", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404);

    let (status, body) = send(&app, "GET", "/categories/1/questions?page=4294967296", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404);
}

#[tokio::test]
async fn empty_store_listing_is_404() {
    let app = app(store_with(0).await);
    let (status, _) = send(&app, "GET", "/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn questions_by_category() {
    let app = app(store_with(8).await);
    let (status, body) = send(&app, "GET", "/categories/1/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_category"], 1);
    assert_eq!(body["total_questions"], 2);
    for q in body["questions"].as_array().unwrap() {
        assert_eq!(q["category"], 1);
    }

    let (status, body) = send(&app, "GET", "/categories/99/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404);
}

#[tokio::test]
async fn create_then_fetch() {
    let app = app(store_with(4).await);
    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({
            "question": "What is the capital of Peru?",
            "answer": "Lima",
            "category": 3,
            "difficulty": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let created = body["question"].clone();
    assert_eq!(created["id"], 5);

    let (status, body) = send(&app, "GET", "/questions/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], created);
    assert_eq!(body["question"]["answer"], "Lima");
    assert_eq!(body["question"]["category"], 3);
    assert_eq!(body["question"]["difficulty"], 2);
}

#[tokio::test]
async fn create_stores_text_verbatim() {
    let app = app(store_with(0).await);
    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({"question": "  Padded?  ", "answer": " ", "category": 1, "difficulty": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["question"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/questions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["question"], "  Padded?  ");
    assert_eq!(body["question"]["answer"], " ");
}

#[tokio::test]
async fn create_with_missing_field_is_400() {
    let app = app(store_with(0).await);
    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({"question": "Q?", "answer": "", "category": 1, "difficulty": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, 400);

    let (status, _) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({"question": "Q?", "answer": "A", "category": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = app(store_with(0).await);
    let request = Request::builder()
        .method("POST")
        .uri("/questions")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_twice() {
    let app = app(store_with(2).await);
    let (status, body) = send(&app, "DELETE", "/questions/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 2}));

    let (status, body) = send(&app, "DELETE", "/questions/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404);
}

#[tokio::test]
async fn non_integer_id_is_404() {
    let app = app(store_with(1).await);
    let (status, body) = send(&app, "DELETE", "/questions/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404);
}

#[tokio::test]
async fn search_single_hit_and_no_hits() {
    let app = app(store_with(4).await);

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "AUTOBIOGRAPHY"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(body["total_questions"], 1);

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "xyzzy"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_total_counts_current_page() {
    let app = app(store_with(12).await);
    let (status, body) = send(
        &app,
        "POST",
        "/questions/search?page=2",
        Some(json!({"searchTerm": "what"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let on_page = body["questions"].as_array().unwrap().len();
    assert_eq!(body["total_questions"], on_page);
}

#[tokio::test]
async fn search_without_term_is_422() {
    let app = app(store_with(1).await);
    let (status, body) = send(&app, "POST", "/questions/search", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422);
}

#[tokio::test]
async fn quiz_all_categories_returns_a_question() {
    let app = app(store_with(4).await);
    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"quiz_category": {"id": 0, "type": "click"}, "previous_questions": []})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["question"]["id"].as_i64().unwrap();
    assert!((1..=4).contains(&id));
}

#[tokio::test]
async fn quiz_walks_category_until_exhausted() {
    let app = app(store_with(8).await);
    let mut seen: Vec<i64> = Vec::new();

    loop {
        let (status, body) = send(
            &app,
            "POST",
            "/quizzes",
            Some(json!({"quiz_category": {"id": 1, "type": "Science"}, "previous_questions": seen})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        if body["question"].is_null() {
            break;
        }
        assert_eq!(body["question"]["category"], 1);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!seen.contains(&id));
        seen.push(id);
    }

    seen.sort_unstable();
    assert_eq!(seen, vec![2, 6]);
}

#[tokio::test]
async fn quiz_without_category_is_422() {
    let app = app(store_with(2).await);
    let (status, body) = send(&app, "POST", "/quizzes", Some(json!({"previous_questions": []}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422);
}

#[tokio::test]
async fn unknown_route_and_method() {
    let app = app(store_with(0).await);
    let (status, body) = send(&app, "GET", "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404);

    let (status, body) = send(&app, "PUT", "/quizzes", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error(&body, 405);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app(store_with(0).await);
    let request = Request::builder()
        .method("GET")
        .uri("/categories")
        .header("origin", "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
