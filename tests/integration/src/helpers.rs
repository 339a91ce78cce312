//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, signing in as an admin,
//! and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use catalog_api::{create_app, create_app_state};
use catalog_common::AppConfig;
use catalog_core::entities::UserDraft;
use catalog_core::traits::UserRepository;
use catalog_db::{create_pool, DatabaseConfig, PgPool, PgUserRepository};
use reqwest::{multipart, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_name, SessionResponse};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let db = create_pool(&DatabaseConfig {
            url: config.database.url.clone(),
            max_connections: 2,
            min_connections: 1,
            ..Default::default()
        })
        .await?;

        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            db,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Provision a fresh admin account and sign in through the passcode flow
    ///
    /// The passcode is read back from the database, so no mail provider is
    /// needed.
    pub async fn admin_session(&self) -> Result<SessionResponse> {
        let repo = PgUserRepository::new(self.db.clone());
        let user_name = unique_name("admin");
        let email = format!("{user_name}@example.com");
        repo.create(&UserDraft {
            email: email.clone(),
            user_name,
            display_name: None,
        })
        .await?;

        let response = self
            .post("/api/auth/v1/send-otp", &json!({ "email": email }))
            .await?;
        assert_status(response, StatusCode::OK).await?;

        let otp = repo
            .find_by_email(&email)
            .await?
            .and_then(|user| user.otp)
            .context("passcode was not stored")?;

        let response = self
            .post(
                "/api/auth/v1/check-otp",
                &json!({ "email": email, "otp": otp }),
            )
            .await?;
        assert_json(response, StatusCode::OK).await
    }

    /// Session token of a freshly provisioned admin
    pub async fn admin_token(&self) -> Result<String> {
        Ok(self.admin_session().await?.token)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Upload a single file as multipart form data
    pub async fn upload_auth(
        &self,
        path: &str,
        token: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new().part("file", part);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("API_PORT").is_err() {
        eprintln!("Skipping test: API_PORT not set");
        return false;
    }

    if std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: JWT_SECRET not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
