use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use user_directory::api::router::create_router_with_state;
use user_directory::api::state::AppState;
use user_directory::infrastructure::user::{InMemoryUserRepository, UserService};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod) against the in-memory repository,
        // bound to an ephemeral port.
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = Arc::new(UserService::new(repository));
        let app = create_router_with_state(AppState::new(service));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_user(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/user", base_url))
        .json(&json!({ "name": name, "email": email }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn create_then_get_returns_same_user() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "Alice", "alice@example.com").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User is Created");
    let id = body["user"]["id"].as_i64().unwrap();

    let res = client
        .get(format!("{}/user/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "Alice");
    assert_eq!(fetched["email"], "alice@example.com");
}

#[tokio::test]
async fn malformed_email_is_rejected_and_nothing_persists() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "Alice", "not-an-email").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email address");

    let res = client
        .get(format!("{}/user", srv.base_url))
        .send()
        .await
        .unwrap();
    let users: serde_json::Value = res.json().await.unwrap();
    assert_eq!(users.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "", "alice@example.com").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Name cannot be empty");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "Alice", "shared@example.com").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = create_user(&client, &srv.base_url, "Bob", "shared@example.com").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Email is already in use. Please use a different email."
    );

    // Only one row persists
    let res = client
        .get(format!("{}/user", srv.base_url))
        .send()
        .await
        .unwrap();
    let users: serde_json::Value = res.json().await.unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_nonexistent_user_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/user/999999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/user/abc", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid user ID format.");
}

#[tokio::test]
async fn list_returns_all_users_in_insertion_order() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_user(&client, &srv.base_url, "Alice", "alice@example.com").await;
    create_user(&client, &srv.base_url, "Bob", "bob@example.com").await;

    let res = client
        .get(format!("{}/user", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let users: serde_json::Value = res.json().await.unwrap();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Alice");
    assert_eq!(users[1]["name"], "Bob");
}

#[tokio::test]
async fn update_round_trip_via_put() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "Alice", "alice@example.com").await;
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["user"]["id"].as_i64().unwrap();

    let res = client
        .put(format!("{}/user/{}", srv.base_url, id))
        .json(&json!({ "name": "Alicia", "email": "alicia@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User updated successfully.");
    assert_eq!(body["user"]["name"], "Alicia");

    let res = client
        .get(format!("{}/user/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["name"], "Alicia");
    assert_eq!(fetched["email"], "alicia@example.com");
}

#[tokio::test]
async fn update_via_patch_behaves_like_put() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "Alice", "alice@example.com").await;
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["user"]["id"].as_i64().unwrap();

    let res = client
        .patch(format!("{}/user/{}", srv.base_url, id))
        .json(&json!({ "name": "Alicia", "email": "alicia@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["email"], "alicia@example.com");
}

#[tokio::test]
async fn update_missing_user_sends_single_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/user/42", srv.base_url))
        .json(&json!({ "name": "Nobody", "email": "nobody@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn update_to_taken_email_is_a_conflict() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_user(&client, &srv.base_url, "Alice", "alice@example.com").await;
    let res = create_user(&client, &srv.base_url, "Bob", "bob@example.com").await;
    let body: serde_json::Value = res.json().await.unwrap();
    let bob_id = body["user"]["id"].as_i64().unwrap();

    let res = client
        .put(format!("{}/user/{}", srv.base_url, bob_id))
        .json(&json!({ "name": "Bob", "email": "alice@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Email is already in use. Please use a different email."
    );
}

#[tokio::test]
async fn delete_is_permanent() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_user(&client, &srv.base_url, "Alice", "alice@example.com").await;
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["user"]["id"].as_i64().unwrap();

    let res = client
        .delete(format!("{}/user/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User deleted successfully.");

    // Subsequent lookups and deletes observe the removal
    let res = client
        .get(format!("{}/user/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/user/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/user/abc", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid user ID format.");
}

#[tokio::test]
async fn create_with_missing_field_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/user", srv.base_url))
        .json(&json!({ "name": "Alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn health_probes_respond() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");

    let res = client
        .get(format!("{}/ready", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/live", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
