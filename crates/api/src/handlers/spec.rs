//! Handlers for the `/specs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use printspec_core::error::CoreError;
use printspec_core::types::DbId;
use printspec_db::models::spec::{Spec, SpecFields, SpecPatch};
use printspec_db::repositories::SpecRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `DELETE /api/specs/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Spec", id })
}

/// Parse a path id. Anything that is not an integer cannot name a row, so
/// callers treat it exactly like an id that was never assigned.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse().map_err(|_| {
        AppError::Core(CoreError::NotFoundByKey {
            entity: "Spec",
            key: raw.to_string(),
        })
    })
}

/// GET /api/specs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Spec>>> {
    let specs = SpecRepo::list(&state.pool).await?;
    Ok(Json(specs))
}

/// GET /api/specs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Spec>> {
    let id = parse_id(&raw_id)?;
    let spec = SpecRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(spec))
}

/// POST /api/specs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SpecFields>,
) -> AppResult<(StatusCode, Json<Spec>)> {
    let spec = SpecRepo::create(&state.pool, &input).await?;
    tracing::info!(id = spec.id, "Spec created");
    Ok((StatusCode::CREATED, Json(spec)))
}

/// PUT /api/specs/{id}
///
/// Merges the supplied fields onto the stored record; omitted fields keep
/// their previous values.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(patch): Json<SpecPatch>,
) -> AppResult<Json<Spec>> {
    let id = parse_id(&raw_id)?;
    let spec = SpecRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(spec))
}

/// DELETE /api/specs/{id}
///
/// Deleting an unknown ID is not an error; it reports `deleted: false`.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let Ok(id) = parse_id(&raw_id) else {
        return Ok(Json(DeleteResponse { deleted: false }));
    };
    let deleted = SpecRepo::delete(&state.pool, id).await?;
    tracing::info!(id, deleted, "Spec delete");
    Ok(Json(DeleteResponse { deleted }))
}
