#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::JwtHandler;
use fitness_service::domain::auth::service::AuthService;
use fitness_service::domain::simulator::service::SimulatorService;
use fitness_service::domain::user::service::UserService;
use fitness_service::inbound::http::router::create_router;
use fitness_service::outbound::repositories::SqliteSimulatorRepository;
use fitness_service::outbound::repositories::SqliteUserRepository;
use serde_json::json;
use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: TestDb,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

/// Migrated SQLite database in a temporary directory, removed on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let db = TestDb::new().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(SqliteUserRepository::new(db.pool.clone()));
        let simulator_repository = Arc::new(SqliteSimulatorRepository::new(db.pool.clone()));

        let user_service = Arc::new(UserService::new(user_repository));
        let simulator_service = Arc::new(SimulatorService::new(simulator_repository));
        let authenticator = Authenticator::new(JWT_SECRET)
            .with_token_lifetime_hours(1)
            .expect("Failed to set token lifetime");
        let auth_service = Arc::new(
            AuthService::new(Arc::clone(&user_service), Arc::new(authenticator))
                .expect("Failed to build auth service"),
        );

        let router = create_router(
            user_service,
            simulator_service,
            auth_service,
            Duration::from_secs(10),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            db,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response body
    pub async fn register(&self, username: &str, password: &str) -> Value {
        let response = self
            .post("/users/register")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Register a user and return its token
    pub async fn register_token(&self, username: &str) -> String {
        let body = self.register(username, "pass_word!").await;
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}

impl TestDb {
    /// Create a fresh, migrated database file
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let options = SqliteConnectOptions::new()
            .filename(dir.path().join("fitness.sqlite"))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool, _dir: dir }
    }
}
