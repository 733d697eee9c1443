use std::sync::Arc;

use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: printspec_db::DbPool,
    /// Filesystem store for uploaded reference files.
    pub uploads: Arc<UploadStore>,
}
