use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use musclemate_ai::{AiError, GenerativeClient};
use musclemate_api::app::services::AppServices;
use musclemate_infra::{seed, InMemoryCatalogStore, InMemoryIdentityStore, InMemoryOrderStore};

/// Deterministic AI client for tests; echoes a canned line.
struct ScriptedClient;

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        Ok("Drink water and train consistently.".to_string())
    }

    fn model_name(&self) -> &str {
        "scripted-test-model"
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the same router as prod against in-memory stores, bound to
    /// an ephemeral port.
    async fn spawn(ai: Option<Arc<dyn GenerativeClient>>) -> Self {
        let catalog = Arc::new(InMemoryCatalogStore::new());
        seed::seed_catalog(catalog.as_ref()).await.unwrap();

        let services = Arc::new(AppServices::new(
            Arc::new(InMemoryIdentityStore::new()),
            catalog,
            Arc::new(InMemoryOrderStore::new()),
            ai,
        ));
        let app = musclemate_api::app::build_app(services);

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

async fn register_and_login(client: &reqwest::Client, base_url: &str, username: &str) -> String {
    let res = client
        .post(format!("{}/accounts/register/", base_url))
        .json(&json!({"username": username, "email": format!("{username}@example.com"), "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

async fn first_product_id(client: &reqwest::Client, base_url: &str) -> String {
    let res = client
        .get(format!("{}/products/items/", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    body[0]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_and_ping_are_public() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/accounts/ping/", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn orders_require_a_session() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/orders/mine/", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "authentication required");

    // Garbage token is rejected the same way.
    let res = client
        .post(format!("{}/orders/place/", srv.base_url))
        .bearer_auth("not-a-token")
        .json(&json!({"items": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    register_and_login(&client, &srv.base_url, "sam").await;

    let res = client
        .post(format!("{}/accounts/register/", srv.base_url))
        .json(&json!({"username": "sam", "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    register_and_login(&client, &srv.base_url, "dana").await;

    let res = client
        .post(format!("{}/accounts/session-login/", srv.base_url))
        .json(&json!({"username": "dana", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid credentials");

    let res = client
        .post(format!("{}/accounts/session-login/", srv.base_url))
        .json(&json!({"username": "dana", "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "kit").await;

    let res = client
        .post(format!("{}/accounts/session-logout/", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/orders/mine/", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn first_order_is_full_price_second_gets_ten_percent_off() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "ravi").await;
    let product = first_product_id(&client, &srv.base_url).await;

    // First order: 2 x 125.00, no discount.
    let res = client
        .post(format!("{}/orders/place/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({"items": [{"product": product, "price": "125.00", "quantity": 2}]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user_name"], "ravi");
    assert_eq!(body["total_amount"], "250.00");
    assert_eq!(body["discount_amount"], "0");

    // Second order, same lines: repeat customer, 10% off.
    let res = client
        .post(format!("{}/orders/place/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({"items": [{"product": product, "price": "125.00", "quantity": 2}]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["discount_amount"], "25.00");
    assert_eq!(body["total_amount"], "225.00");
    assert_eq!(body["items"][0]["price"], "125.00");
    assert_eq!(body["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn empty_items_are_rejected() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "noa").await;

    let res = client
        .post(format!("{}/orders/place/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({"items": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "No items");

    // Nothing was written.
    let res = client
        .get(format!("{}/orders/mine/", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 0);
    assert_eq!(body["orders"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_product_is_rejected() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "lou").await;

    let res = client
        .post(format!("{}/orders/place/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({"items": [{"product": uuid::Uuid::now_v7().to_string(), "price": "10.00"}]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn my_orders_lists_newest_first() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let token = register_and_login(&client, &srv.base_url, "mira").await;
    let product = first_product_id(&client, &srv.base_url).await;

    for price in ["1.00", "2.00", "3.00"] {
        let res = client
            .post(format!("{}/orders/place/", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({"items": [{"product": product, "price": price, "quantity": 1}]}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .get(format!("{}/orders/mine/", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 3);

    let subtotals: Vec<&str> = body["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["items"][0]["price"].as_str().unwrap())
        .collect();
    assert_eq!(subtotals, vec!["3.00", "2.00", "1.00"]);
}

#[tokio::test]
async fn ai_coach_answers_when_configured() {
    let srv = TestServer::spawn(Some(Arc::new(ScriptedClient))).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/ai_coach/status/", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "active");
    assert_eq!(body["model"], "scripted-test-model");

    let res = client
        .post(format!("{}/ai_coach/chat/", srv.base_url))
        .json(&json!({"message": "How do I build muscle?"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["response"], "Drink water and train consistently.");
}

#[tokio::test]
async fn ai_coach_reports_inactive_without_a_key() {
    let srv = TestServer::spawn(None).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/ai_coach/status/", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], "inactive");

    let res = client
        .post(format!("{}/ai_coach/chat/", srv.base_url))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn empty_chat_message_is_rejected() {
    let srv = TestServer::spawn(Some(Arc::new(ScriptedClient))).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/ai_coach/chat/", srv.base_url))
        .json(&json!({"message": "   "}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Message is required");
}
