#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use printspec_api::config::ServerConfig;
use printspec_api::router::build_app_router;
use printspec_api::state::AppState;
use printspec_api::uploads::UploadStore;

/// Contents of the stub front-end entry document.
pub const INDEX_HTML: &str = "<!doctype html><title>printspec</title><div id=\"app\"></div>";

const MULTIPART_BOUNDARY: &str = "printspec-test-boundary";

/// A migrated database plus throwaway upload/public directories.
pub struct TestEnv {
    pub pool: SqlitePool,
    root: TempDir,
}

impl TestEnv {
    pub fn new(pool: SqlitePool) -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("uploads")).unwrap();
        std::fs::create_dir_all(root.path().join("public").join("assets")).unwrap();
        std::fs::write(root.path().join("public").join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(
            root.path().join("public").join("assets").join("app.js"),
            "console.log('printspec');",
        )
        .unwrap();
        Self { pool, root }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.root.path().join("uploads")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.path().join("public")
    }

    /// Build a test `ServerConfig` pointing at this environment's directories.
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            upload_dir: self.upload_dir(),
            public_dir: self.public_dir(),
            cors_origins: Vec::new(),
            json_body_limit_bytes: 5 * 1024 * 1024,
            upload_body_limit_bytes: 10 * 1024 * 1024,
        }
    }

    /// Build the full application router, exactly as `main.rs` does.
    pub fn app(&self) -> Router {
        self.app_with(self.config())
    }

    pub fn app_with(&self, config: ServerConfig) -> Router {
        let state = AppState {
            pool: self.pool.clone(),
            uploads: Arc::new(UploadStore::new(&config.upload_dir)),
        };
        build_app_router(state, &config)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// Build a multipart body with one part per `(field, filename, bytes)`.
pub fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, filename, bytes) in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
