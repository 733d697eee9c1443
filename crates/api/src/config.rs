use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://data.db`).
    pub database_url: String,
    /// Directory receiving uploaded files, served under `/uploads`.
    pub upload_dir: PathBuf,
    /// Directory holding the prebuilt front-end, including `index.html`.
    pub public_dir: PathBuf,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    /// Maximum JSON request body size.
    pub json_body_limit_bytes: usize,
    /// Maximum multipart upload body size.
    pub upload_body_limit_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default            |
    /// |---------------------------|--------------------|
    /// | `HOST`                    | `0.0.0.0`          |
    /// | `PORT`                    | `3000`             |
    /// | `DATABASE_URL`            | `sqlite://data.db` |
    /// | `UPLOAD_DIR`              | `uploads`          |
    /// | `PUBLIC_DIR`              | `public`           |
    /// | `CORS_ORIGINS`            | (any origin)       |
    /// | `JSON_BODY_LIMIT_BYTES`   | `5242880`          |
    /// | `UPLOAD_BODY_LIMIT_BYTES` | `104857600`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data.db".into());

        let upload_dir = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "uploads".into())
            .into();

        let public_dir = std::env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let json_body_limit_bytes: usize = std::env::var("JSON_BODY_LIMIT_BYTES")
            .unwrap_or_else(|_| "5242880".into())
            .parse()
            .expect("JSON_BODY_LIMIT_BYTES must be a valid usize");

        let upload_body_limit_bytes: usize = std::env::var("UPLOAD_BODY_LIMIT_BYTES")
            .unwrap_or_else(|_| "104857600".into())
            .parse()
            .expect("UPLOAD_BODY_LIMIT_BYTES must be a valid usize");

        Self {
            host,
            port,
            database_url,
            upload_dir,
            public_dir,
            cors_origins,
            json_body_limit_bytes,
            upload_body_limit_bytes,
        }
    }

    /// Path of the single-page entry document.
    pub fn index_file(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}
