#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{AppConfig, AuthConfig, CorsConfig, ServerConfig, StorageConfig};
use server::state::AppState;
use server::store::SubmissionStore;
use server::uploads::UploadSink;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub mod routes {
    pub const LOGIN: &str = "/api/v1/auth/login";
    pub const ME: &str = "/api/v1/auth/me";
    pub const PROBLEMS: &str = "/api/v1/problems";
    pub const RUBRIC: &str = "/api/v1/rubric";
    pub const SUBMISSIONS: &str = "/api/v1/submissions";
    pub const EXPORT_EXCEL: &str = "/api/v1/export/excel";

    pub fn problem(id: &str) -> String {
        format!("/api/v1/problems/{id}")
    }

    pub fn submission(candidate_id: &str) -> String {
        format!("/api/v1/submissions/{candidate_id}")
    }

    pub fn submission_evaluate(candidate_id: &str) -> String {
        format!("/api/v1/submissions/{candidate_id}/evaluate")
    }

    pub fn submission_archive(candidate_id: &str) -> String {
        format!("/api/v1/submissions/{candidate_id}/archive")
    }
}

/// A running test server backed by a temp directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    /// Backing file of the submission store, inside the temp dir.
    pub store_file: PathBuf,
    /// Upload directory, inside the temp dir.
    pub upload_dir: PathBuf,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            auth: AuthConfig {
                admin_username: ADMIN_USERNAME.to_string(),
                admin_password: ADMIN_PASSWORD.to_string(),
                jwt_secret: "test-secret-for-integration-tests".to_string(),
            },
            storage: StorageConfig {
                store_file: dir.path().join("submissions.json"),
                upload_dir: dir.path().join("uploads"),
                export_dir: dir.path().join("exports"),
            },
        };

        let store = SubmissionStore::open(&config.storage.store_file)
            .expect("Failed to open submission store");
        let state = AppState {
            store: Arc::new(store),
            uploads: Arc::new(UploadSink::new(&config.storage.upload_dir)),
            config: config.clone(),
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            store_file: config.storage.store_file,
            upload_dir: config.storage.upload_dir,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    /// GET returning status, headers, and raw bytes (for download endpoints).
    pub async fn get_bytes_with_token(
        &self,
        path: &str,
        token: &str,
    ) -> (u16, reqwest::header::HeaderMap, Vec<u8>) {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let bytes = res.bytes().await.expect("Failed to read response bytes");
        (status, headers, bytes.to_vec())
    }

    pub async fn upload_archive(
        &self,
        candidate_id: &str,
        file_name: &str,
        file_bytes: Vec<u8>,
    ) -> TestResponse {
        let part = reqwest::multipart::Part::bytes(file_bytes)
            .file_name(file_name.to_string())
            .mime_str("application/zip")
            .expect("Failed to set MIME type");
        let form = reqwest::multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(self.url(&routes::submission_archive(candidate_id)))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart upload request");

        TestResponse::from_response(res).await
    }

    /// Log in with the configured admin credentials, returning the token.
    pub async fn login_admin(&self) -> String {
        let body = serde_json::json!({
            "username": ADMIN_USERNAME,
            "password": ADMIN_PASSWORD,
        });

        let res = self.post_without_token(routes::LOGIN, &body).await;
        assert_eq!(res.status, 200, "Admin login failed: {}", res.text);

        res.body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }

    /// Create a github-type submission, returning its candidate ID.
    pub async fn create_github_submission(&self, name: &str) -> String {
        let body = serde_json::json!({
            "candidate_name": name,
            "candidate_email": format!("{name}@example.com"),
            "problem_id": "problem_2",
            "submission_type": "github",
            "github_link": "http://x",
        });

        let res = self.post_without_token(routes::SUBMISSIONS, &body).await;
        assert_eq!(res.status, 201, "Intake failed: {}", res.text);

        res.body["candidate_id"]
            .as_str()
            .expect("Intake response has no candidate_id")
            .to_string()
    }
}

/// The reference evaluation payload from the scoring rubric walkthrough.
pub fn reference_evaluation() -> Value {
    serde_json::json!({
        "evaluator_name": "Priya",
        "evaluator_notes": "Solid submission",
        "db_schema": 8, "db_plsql": 7, "db_procedures": 9,
        "api_design": 9, "api_integration": 8, "api_docs": 4,
        "code_architecture": 7, "code_error_handling": 5, "code_organization": 5,
        "test_unit": 4, "test_integration": 4, "test_readme": 4,
        "bonus_docker": 3, "bonus_ui": 2,
    })
}
