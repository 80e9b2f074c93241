//! Router-level tests against a real SQLite store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request as HttpRequest, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::app::App;
use crate::infrastructure::{
    ports::{CategoryRepo, QuestionRepo, RandomPort},
    random::FixedRandom,
    sqlite::SqliteRepositories,
};
use crate::test_fixtures::{
    insert_categories, insert_questions, numbered_questions, question, sqlite_store,
    standard_categories,
};

struct TestServer {
    router: Router,
    store: SqliteRepositories,
    _dir: TempDir,
}

impl TestServer {
    async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = sqlite_store(&dir).await;
        insert_categories(&store, &standard_categories()).await;

        let question_repo: Arc<dyn QuestionRepo> = store.question.clone();
        let category_repo: Arc<dyn CategoryRepo> = store.category.clone();
        let random: Arc<dyn RandomPort> = Arc::new(FixedRandom(0));
        let app = Arc::new(App::with_ports(question_repo, category_repo, random));

        Self {
            router: super::http::routes().with_state(app),
            store,
            _dir: dir,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = HttpRequest::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }
}

fn ids(json: &Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}

fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(
        body,
        &json!({"success": false, "error": expected.as_u16(), "message": message})
    );
}

// =============================================================================
// Health and Fallbacks
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let server = TestServer::new().await;
    let request = HttpRequest::builder()
        .uri("/api/health")
        .body(Body::empty())
        .expect("request");

    let response = server.router.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let server = TestServer::new().await;
    let (status, body) = server.get("/nope").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn unsupported_method_returns_json_405() {
    let server = TestServer::new().await;
    let (status, body) = server.send(Method::PUT, "/categories", None).await;
    assert_error(status, &body, StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn lists_categories_as_id_to_type_map() {
    let server = TestServer::new().await;
    let (status, body) = server.get("/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "categories": {"1": "Science", "2": "Art", "3": "Geography"}
        })
    );
}

#[tokio::test]
async fn category_without_questions_is_404_and_populated_one_is_200() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &[question(5, "Where is Lake Victoria?", 3)]).await;

    let (status, body) = server.get("/categories/1/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");

    let (status, body) = server.get("/categories/3/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["current_category"], json!(3));
    assert_eq!(body["total_questions"], json!(1));
    assert_eq!(ids(&body), vec![5]);
}

#[tokio::test]
async fn unknown_category_is_404() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &[question(1, "Q?", 1)]).await;

    let (status, body) = server.get("/categories/1000/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");

    let (status, _) = server.get("/categories/abc/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn empty_store_listing_is_404() {
    let server = TestServer::new().await;
    let (status, body) = server.get("/questions?page=1").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn listing_pages_through_the_store() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &numbered_questions(12, 2)).await;

    let (status, body) = server.get("/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], json!(12));
    assert_eq!(body["current_category"], json!("0"));
    assert_eq!(body["categories"]["2"], json!("Art"));

    let (status, body) = server.get("/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![11, 12]);

    let (status, _) = server.get("/questions?page=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unparsable page falls back to the first one.
    let (status, body) = server.get("/questions?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).first(), Some(&1));
}

#[tokio::test]
async fn repeated_page_parameter_uses_first_value() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &numbered_questions(12, 2)).await;

    let (status, body) = server.get("/questions?page=1&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());

    let (status, body) = server.get("/questions?page=2&page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![11, 12]);

    let (status, body) = server.get("/categories/2/questions?page=2&page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![11, 12]);
}

#[tokio::test]
async fn odd_query_strings_never_produce_plain_text_errors() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &numbered_questions(3, 1)).await;

    for uri in ["/questions?page", "/questions?page=1.5", "/questions?&&=&page=1"] {
        let (status, body) = server.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(ids(&body), vec![1, 2, 3], "{uri}");
    }
}

// =============================================================================
// Search and Create
// =============================================================================

#[tokio::test]
async fn search_matches_case_insensitively() {
    let server = TestServer::new().await;
    insert_questions(
        &server.store,
        &[
            question(1, "What is the title of the 1990 fantasy novel?", 2),
            question(2, "Which planet is largest?", 1),
            question(3, "Whose autobiography is TITLED 'I Know Why the Caged Bird Sings'?", 2),
        ],
    )
    .await;

    let (status, body) = server.post("/questions", json!({"searchTerm": "title"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 3]);
    assert_eq!(body["total_questions"], json!(2));
    assert_eq!(body["current_category"], json!(0));
    assert_eq!(body["categories"]["1"], json!("Science"));
}

#[tokio::test]
async fn create_returns_new_id_and_refreshed_listing() {
    let server = TestServer::new().await;

    let (status, body) = server
        .post(
            "/questions",
            json!({
                "question": "What is the heaviest organ in the human body?",
                "answer": "The Liver",
                "difficulty": "4",
                "category": 1
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let created = body["created"].as_i64().expect("created id");
    assert_eq!(ids(&body), vec![created]);
    assert_eq!(body["total_questions"], json!(1));

    let stored = server
        .store
        .question
        .get(trivia_domain::QuestionId::new(created))
        .await
        .expect("get")
        .expect("stored");
    assert_eq!(stored.difficulty, 4);
    assert_eq!(stored.answer, "The Liver");
}

#[tokio::test]
async fn create_with_missing_field_is_400() {
    let server = TestServer::new().await;
    let (status, body) = server
        .post("/questions", json!({"question": "Q?", "answer": "A", "category": 1}))
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "bad request");
}

#[tokio::test]
async fn create_for_unknown_category_is_422() {
    let server = TestServer::new().await;
    let (status, body) = server
        .post(
            "/questions",
            json!({"question": "Q?", "answer": "A", "difficulty": 1, "category": 77}),
        )
        .await;
    assert_error(
        status,
        &body,
        StatusCode::UNPROCESSABLE_ENTITY,
        "unprocessable entity",
    );
}

#[tokio::test]
async fn malformed_body_is_400() {
    let server = TestServer::new().await;
    let request = HttpRequest::builder()
        .method(Method::POST)
        .uri("/questions")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("request");

    let response = server.router.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_absent_question_is_422() {
    let server = TestServer::new().await;
    let (status, body) = server.send(Method::DELETE, "/questions/99999", None).await;
    assert_error(
        status,
        &body,
        StatusCode::UNPROCESSABLE_ENTITY,
        "unprocessable entity",
    );
}

#[tokio::test]
async fn delete_removes_question_and_relists() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &numbered_questions(3, 1)).await;

    let (status, body) = server.send(Method::DELETE, "/questions/2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_id"], json!(2));
    assert_eq!(ids(&body), vec![1, 3]);
    assert_eq!(body["total_questions"], json!(2));

    let (status, _) = server.send(Method::DELETE, "/questions/2", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn post_to_question_id_is_always_405() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &numbered_questions(7, 1)).await;

    let (status, body) = server.post("/questions/7", json!({"answer": "changed"})).await;
    assert_error(status, &body, StatusCode::METHOD_NOT_ALLOWED, "method not allowed");

    let (status, _) = server.post("/questions/12345", json!({})).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Quiz
// =============================================================================

#[tokio::test]
async fn quiz_returns_unseen_question_from_category() {
    let server = TestServer::new().await;
    insert_questions(
        &server.store,
        &[
            question(1, "Science?", 1),
            question(2, "Art?", 2),
            question(3, "More art?", 2),
        ],
    )
    .await;

    let (status, body) = server
        .post(
            "/quizzes",
            json!({"previous_questions": [2], "quiz_category": {"type": "Art", "id": "2"}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"]["id"], json!(3));
    assert_eq!(body["question"]["category"], json!(2));
}

#[tokio::test]
async fn quiz_with_everything_seen_returns_null_question() {
    let server = TestServer::new().await;
    insert_questions(&server.store, &numbered_questions(4, 1)).await;

    let (status, body) = server
        .post(
            "/quizzes",
            json!({"previous_questions": [1, 2, 3, 4], "quiz_category": {"type": "click", "id": 0}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn quiz_category_without_id_draws_from_all() {
    let server = TestServer::new().await;
    insert_questions(
        &server.store,
        &[question(1, "Science?", 1), question(2, "Art?", 2)],
    )
    .await;

    let (status, body) = server
        .post(
            "/quizzes",
            json!({"previous_questions": [1], "quiz_category": {"type": "click"}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], json!(2));
}

#[tokio::test]
async fn quiz_without_json_body_is_400() {
    let server = TestServer::new().await;
    let (status, body) = server.send(Method::POST, "/quizzes", None).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "bad request");
}
