use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use accountd::config::{Backend, Config};
use accountd::store::MemoryStore;

/// A running test server instance backed by the in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Create a user, return (body, status).
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        role: &str,
        password: &str,
    ) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/users"))
            .json(&json!({
                "name": name,
                "email": email,
                "role": role,
                "password": password,
            }))
            .send()
            .await
            .expect("create user request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create a user and return its assigned id.
    pub async fn create_user_ok(&self, name: &str, email: &str) -> i64 {
        let (body, status) = self.create_user(name, email, "USER", "secret").await;
        assert_eq!(status, StatusCode::OK, "create user failed: {body}");
        body["id"].as_i64().expect("id in create response")
    }

    /// Fetch a user by id, return (body, status).
    pub async fn get_user(&self, id: i64) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(&format!("/api/v1/users/{id}")))
            .send()
            .await
            .expect("get user request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Update a user with the given JSON body, return (body, status).
    pub async fn update_user(&self, id: i64, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(&format!("/api/v1/users/{id}")))
            .json(body)
            .send()
            .await
            .expect("update user request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Delete a user by id, return (body, status).
    pub async fn delete_user(&self, id: i64) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(&format!("/api/v1/users/{id}")))
            .send()
            .await
            .expect("delete user request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn a test app on a random port, serving from the in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_seeded(0).await
}

/// Spawn a test app whose store is pre-seeded with fabricated users.
pub async fn spawn_app_seeded(seed_users: usize) -> TestApp {
    let config = Config {
        backend: Backend::Memory,
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        seed_users,
        log_level: "warn".to_string(),
    };

    let store = Arc::new(MemoryStore::seeded(seed_users));
    let app = accountd::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp { addr, client }
}
