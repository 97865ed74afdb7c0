use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let db = models::db::connect_in_memory().await.expect("in-memory db");
    server::startup::build_app(db)
}

async fn seeded_app() -> Router {
    let db = models::db::connect_in_memory().await.expect("in-memory db");
    service::seed::seed_if_empty(&db).await.expect("seed");
    server::startup::build_app(db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Option<String>, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, location, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;
    let (status, _, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn openapi_document_lists_blog_paths() {
    let app = app().await;
    let (status, _, body) = send(&app, Method::GET, "/docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/posts"].is_object());
    assert!(body["paths"]["/api/posts/{slug}"].is_object());
    assert!(body["paths"]["/api/tags"].is_object());
}

#[tokio::test]
async fn empty_database_answers_not_found() {
    let app = app().await;
    let (status, _, body) = send(&app, Method::GET, "/api/posts", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "There is no blogs in database");

    let (status, _, body) = send(&app, Method::GET, "/api/tags", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "There is no tags in database");
}

#[tokio::test]
async fn create_then_fetch_by_slug() {
    let app = app().await;
    let (status, location, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"title": "How to train your dragon", "description": "Ever wonder how?", "body": "You have to believe", "tagList": ["dragons", "training"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/api/posts/how-to-train-your-dragon"));
    assert_eq!(body["slug"], "how-to-train-your-dragon");
    assert_eq!(body["tagList"], json!(["dragons", "training"]));

    let (status, _, body) = send(&app, Method::GET, "/api/posts/how-to-train-your-dragon", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "How to train your dragon");
    assert_eq!(body["description"], "Ever wonder how?");
    assert_eq!(body["body"], "You have to believe");

    let (status, _, body) = send(&app, Method::GET, "/api/tags", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["dragons", "training"]));
}

#[tokio::test]
async fn create_rejects_missing_fields_and_duplicates() {
    let app = app().await;
    let (status, _, body) = send(&app, Method::POST, "/api/posts", Some(json!({"title": "No body", "description": "d"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let post = json!({"title": "Same Title", "description": "d", "body": "b"});
    let (status, _, _) = send(&app, Method::POST, "/api/posts", Some(post.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _, body) = send(&app, Method::POST, "/api/posts", Some(post)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "There is already blog with slug = same-title");
}

#[tokio::test]
async fn list_filters_by_tag() {
    let app = app().await;
    for (title, tags) in [("Rust tips", json!(["rust"])), ("Go tips", json!(["go"])), ("Both", json!(["rust", "go"]))] {
        let (status, _, _) = send(
            &app,
            Method::POST,
            "/api/posts",
            Some(json!({"title": title, "description": "d", "body": "b", "tagList": tags})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _, body) = send(&app, Method::GET, "/api/posts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _, body) = send(&app, Method::GET, "/api/posts?tag=rust", None).await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body.as_array().unwrap().iter().map(|b| b["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs.len(), 2);
    assert!(slugs.contains(&"rust-tips"));
    assert!(slugs.contains(&"both"));

    let (status, _, body) = send(&app, Method::GET, "/api/posts?tag=java", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "There is no blogs with tag = java");
}

#[tokio::test]
async fn update_moves_slug_with_title() {
    let app = seeded_app().await;
    let (status, _, body) = send(&app, Method::PUT, "/api/posts/title-1", Some(json!({"title": "Renamed Post"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "renamed-post");
    assert_eq!(body["description"], "description 1");
    assert_eq!(body["tagList"], json!(["IOS", "Android", "Mac"]));

    let (status, _, _) = send(&app, Method::GET, "/api/posts/title-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = send(&app, Method::PUT, "/api/posts/renamed-post", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Didn't specify what you want to update");

    let (status, _, _) = send(&app, Method::PUT, "/api/posts/missing", Some(json!({"body": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_post_but_keeps_tags() {
    let app = seeded_app().await;
    let (status, _, body) = send(&app, Method::DELETE, "/api/posts/title-2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _, body) = send(&app, Method::DELETE, "/api/posts/title-2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "There is no blog with slug = title-2");

    let (_, _, body) = send(&app, Method::GET, "/api/posts", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    let (_, _, body) = send(&app, Method::GET, "/api/tags", None).await;
    assert_eq!(body, json!(["IOS", "Android", "Mac"]));
}

#[tokio::test]
async fn unreadable_bodies_answer_json_errors() {
    let app = seeded_app().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid Request Body");
    assert!(body["message"].is_string());

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"title": "t", "description": "d", "body": "b", "tagList": "rust"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Request Body");

    let req = Request::builder()
        .method(Method::PUT)
        .uri("/api/posts/title-1")
        .body(Body::from(r#"{"title":"x"}"#))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid Request Body");
}

#[tokio::test]
async fn long_titles_and_tags_are_accepted() {
    let app = app().await;
    let title = "word ".repeat(80);
    let tag = "t".repeat(200);
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/posts",
        Some(json!({"title": title, "description": "d".repeat(2000), "body": "b", "tagList": [tag]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"].as_str().unwrap().len(), 400);
    assert_eq!(body["tagList"][0].as_str().unwrap().len(), 200);
}
