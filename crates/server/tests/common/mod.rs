//! Shared fixtures: migrated in-memory database, test config and fake deliveries.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use museum_backend::{
    AppResources,
    api,
    config::{AppConfig, SweepConfig},
    delivery::{EmailDelivery, OutgoingEmail},
    error::DeliveryError,
};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_SECRET: &str = "test-secret-0123456789abcdef";

/// Create a test database connection with every migration applied
pub async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");
    db
}

pub fn create_test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        bind_address: "127.0.0.1:0".into(),
        token_secret: TEST_SECRET.into(),
        frontend_url: "http://localhost:5173/".into(),
        seed_on_startup: false,
        smtp: None,
        sweeps: SweepConfig::default(),
    }
}

/// Remembers every message it was asked to send.
#[derive(Default)]
pub struct RecordingDelivery {
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingDelivery {
    pub fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("lock")
            .iter()
            .map(|e| e.recipient.clone())
            .collect()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        self.sent.lock().expect("lock").push(email.clone());
        Ok(())
    }
}

/// Fails every attempt.
#[derive(Default)]
pub struct FailingDelivery;

#[async_trait]
impl EmailDelivery for FailingDelivery {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), DeliveryError> {
        Err(DeliveryError::Transport("connection refused".into()))
    }
}

/// Succeeds after holding every send for a fixed delay, like a slow mail relay.
pub struct SlowDelivery {
    pub delay: Duration,
}

#[async_trait]
impl EmailDelivery for SlowDelivery {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), DeliveryError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

pub async fn create_test_resources(delivery: Arc<dyn EmailDelivery>) -> AppResources {
    let db = Arc::new(create_test_db().await);
    AppResources::new(db, delivery, Arc::new(create_test_config()))
}

pub fn create_test_server(resources: AppResources) -> TestServer {
    TestServer::new(api::router(resources)).expect("test server")
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).expect("header value"),
    )
}

pub async fn register(server: &TestServer, email: &str, password: &str) {
    server
        .post("/api/register")
        .json(&json!({ "email": email, "password": password }))
        .await
        .assert_status_ok();
}

/// Log in and return the access token.
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/login")
        .form(&[("username", username), ("password", password)])
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["access_token"]
        .as_str()
        .expect("access_token")
        .to_string()
}
