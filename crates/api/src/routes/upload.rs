use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// `POST /upload` -> upload (multipart).
pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(upload::upload))
}
