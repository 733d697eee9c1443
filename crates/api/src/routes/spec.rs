//! Route definitions for the `/specs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::spec;
use crate::state::AppState;

/// Routes mounted at `/specs`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(spec::list).post(spec::create))
        .route(
            "/{id}",
            get(spec::get_by_id).put(spec::update).delete(spec::delete),
        )
}
