pub mod health;
pub mod spec;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /specs                                           list, create
/// /specs/{id}                                      get, update, delete
///
/// /upload                                          upload (multipart)
/// ```
///
/// JSON bodies and uploads carry separate size ceilings.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest(
            "/specs",
            spec::router().layer(DefaultBodyLimit::max(config.json_body_limit_bytes)),
        )
        .merge(upload::router().layer(DefaultBodyLimit::max(config.upload_body_limit_bytes)))
}
