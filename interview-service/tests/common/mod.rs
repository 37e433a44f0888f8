use std::sync::Arc;

use auth::HashAlgorithm;
use auth::HashConfig;
use auth::PasswordHasher;
use auth::TokenCodec;
use interview_service::domain::interview::service::InterviewService;
use interview_service::domain::user::service::UserService;
use interview_service::inbound::http::router::create_router;
use interview_service::outbound::repositories::InMemoryInterviewStore;
use interview_service::outbound::repositories::InMemoryUserStore;

const TEST_TOKEN_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";
pub const TEST_TOKEN_TTL_SECONDS: i64 = 1000;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Codec sharing the server secret, for minting tokens in tests.
    pub token_codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Low iteration count keeps the suite fast; the record format is
        // identical to production.
        let password_hasher = Arc::new(PasswordHasher::new(HashConfig {
            algorithm: HashAlgorithm::Sha512,
            hash_length: 64,
            iterations: 1000,
            salt_length: 16,
        }));

        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserStore::new()),
            password_hasher,
        ));
        let interview_service = Arc::new(InterviewService::new(Arc::new(
            InMemoryInterviewStore::new(),
        )));

        let router = create_router(
            user_service,
            interview_service,
            Arc::new(TokenCodec::new(TEST_TOKEN_SECRET)),
            TEST_TOKEN_TTL_SECONDS,
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_codec: TokenCodec::new(TEST_TOKEN_SECRET),
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

    /// Register a user through the public signup endpoint.
    pub async fn signup(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/users")
            .json(&serde_json::json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute signup request")
    }

    /// Log in via Basic auth and return the issued bearer token.
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self
            .get("/api/v1/authenticate")
            .basic_auth(username, Some(password))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Login response carries no token")
            .to_string()
    }
}
