//! End-to-end tests: the real router over the in-memory store, driven by
//! an HTTP client.

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use customer_api::api::build_app;
use customer_api::app_state::AppState;
use customer_api::domain::sample_customers;
use customer_api::persistence::InMemoryCustomerStore;
use customer_api::service::CustomerService;

async fn spawn_app(store: InMemoryCustomerStore) -> String {
    let state = AppState::new(CustomerService::new(Arc::new(store)));
    let app = build_app(state, Duration::from_secs(5));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    format!("http://{addr}")
}

async fn list(client: &reqwest::Client, base: &str) -> Value {
    let response = client
        .get(format!("{base}/customers"))
        .send()
        .await
        .expect("GET /customers");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.expect("json body")
}

fn success() -> Value {
    json!({"message": "success"})
}

#[tokio::test]
async fn list_returns_seeded_customers() {
    let base = spawn_app(InMemoryCustomerStore::with_customers(sample_customers())).await;
    let client = reqwest::Client::new();

    let body = list(&client, &base).await;
    assert_eq!(
        body,
        json!({
            "customers": [
                {"id": 1, "firstName": "Alice", "lastName": "Sample1"},
                {"id": 2, "firstName": "Bob", "lastName": "Sample2"}
            ]
        })
    );
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let base = spawn_app(InMemoryCustomerStore::new()).await;
    let client = reqwest::Client::new();

    assert_eq!(list(&client, &base).await, json!({"customers": []}));
}

#[tokio::test]
async fn create_then_list_shows_new_customer() {
    let base = spawn_app(InMemoryCustomerStore::with_customers(sample_customers())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/customers"))
        .json(&json!({"first_name": "Carol", "last_name": "Sample3"}))
        .send()
        .await
        .expect("POST /customers");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.json::<Value>().await.expect("json"), success());

    let body = list(&client, &base).await;
    let customers = body["customers"].as_array().expect("customers array");
    assert_eq!(customers.len(), 3);
    assert_eq!(
        customers.last(),
        Some(&json!({"id": 3, "firstName": "Carol", "lastName": "Sample3"}))
    );
}

#[tokio::test]
async fn update_replaces_names_and_keeps_id() {
    let base = spawn_app(InMemoryCustomerStore::with_customers(sample_customers())).await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base}/customers/2"))
        .json(&json!({"first_name": "Robert", "last_name": "Changed"}))
        .send()
        .await
        .expect("PUT /customers/2");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.json::<Value>().await.expect("json"), success());

    let body = list(&client, &base).await;
    assert_eq!(
        body["customers"][1],
        json!({"id": 2, "firstName": "Robert", "lastName": "Changed"})
    );
}

#[tokio::test]
async fn delete_removes_customer() {
    let base = spawn_app(InMemoryCustomerStore::with_customers(sample_customers())).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/customers/1"))
        .send()
        .await
        .expect("DELETE /customers/1");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.json::<Value>().await.expect("json"), success());

    let body = list(&client, &base).await;
    assert_eq!(
        body,
        json!({"customers": [{"id": 2, "firstName": "Bob", "lastName": "Sample2"}]})
    );
}

#[tokio::test]
async fn unknown_id_update_and_delete_succeed_without_changes() {
    let base = spawn_app(InMemoryCustomerStore::with_customers(sample_customers())).await;
    let client = reqwest::Client::new();
    let before = list(&client, &base).await;

    let update = client
        .put(format!("{base}/customers/404"))
        .json(&json!({"first_name": "Nobody", "last_name": "Here"}))
        .send()
        .await
        .expect("PUT /customers/404");
    assert_eq!(update.status(), reqwest::StatusCode::OK);
    assert_eq!(update.json::<Value>().await.expect("json"), success());

    let delete = client
        .delete(format!("{base}/customers/404"))
        .send()
        .await
        .expect("DELETE /customers/404");
    assert_eq!(delete.status(), reqwest::StatusCode::OK);

    assert_eq!(list(&client, &base).await, before);
}

#[tokio::test]
async fn non_integer_id_is_rejected() {
    let base = spawn_app(InMemoryCustomerStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/customers/abc"))
        .send()
        .await
        .expect("DELETE /customers/abc");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["error"]["code"], json!(1001));
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let base = spawn_app(InMemoryCustomerStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/customers"))
        .json(&json!({"firstName": "wrong", "lastName": "keys"}))
        .send()
        .await
        .expect("POST /customers");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    assert_eq!(list(&client, &base).await, json!({"customers": []}));
}

#[tokio::test]
async fn health_reports_store_backend() {
    let base = spawn_app(InMemoryCustomerStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("GET /health");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["store"], json!("memory"));
}

#[tokio::test]
async fn missing_content_type_is_rejected_as_bad_request() {
    let base = spawn_app(InMemoryCustomerStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/customers"))
        .body(r#"{"first_name": "No", "last_name": "Header"}"#)
        .send()
        .await
        .expect("POST /customers");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["error"]["code"], json!(1001));

    assert_eq!(list(&client, &base).await, json!({"customers": []}));
}

#[tokio::test]
async fn responses_carry_cors_headers() {
    let base = spawn_app(InMemoryCustomerStore::with_customers(sample_customers())).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/customers"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .expect("GET /customers");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
