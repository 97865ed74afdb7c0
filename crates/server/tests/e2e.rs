//! Drives a real listener over HTTP.

use serde_json::{json, Value};

async fn spawn_server() -> String {
    let db = models::db::connect_in_memory().await.expect("in-memory db");
    let app = server::startup::build_app(db);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn blog_lifecycle_over_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let title = format!("Post {}", uuid::Uuid::new_v4().simple());

    let resp = client
        .post(format!("{base}/api/posts"))
        .json(&json!({"title": title, "description": "d", "body": "b", "tagList": ["e2e"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    let slug = created["slug"].as_str().unwrap().to_string();
    assert!(slug.starts_with("post-"));

    let resp = client
        .put(format!("{base}/api/posts/{slug}"))
        .json(&json!({"body": "updated"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["body"], "updated");
    assert_eq!(updated["slug"], slug.as_str());

    let resp = client.delete(format!("{base}/api/posts/{slug}")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);

    let resp = client.get(format!("{base}/api/posts/{slug}")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
