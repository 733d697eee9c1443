//! Repository for the `specs` table.

use chrono::Utc;
use printspec_core::types::{DbId, Timestamp};
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqlitePool;

use crate::models::spec::{Spec, SpecFields, SpecPatch};

/// Descriptive columns in bind order. Must match [`bind_fields`].
const FIELD_COLUMNS: &str = "
    project_title, client_name, date, quantity, open_size_w, open_size_h,
    closed_size_w, closed_size_h, orientation, page_count_type, page_count,
    printing_sides, cover_paper, inner_paper, printing_type, cover_finish,
    foil_area, spot_uv_area, binding_type, spine_thickness, creasing,
    trimming_notes, special_instructions, file_format, bleed, safe_zone,
    color_profile, keyline_image_url";

/// Column list shared across queries to avoid repetition.
fn columns() -> String {
    format!("id, {FIELD_COLUMNS}, created_at, updated_at")
}

/// Bind all descriptive fields in [`FIELD_COLUMNS`] order.
fn bind_fields<'q>(
    query: QueryAs<'q, Sqlite, Spec, SqliteArguments<'q>>,
    fields: &'q SpecFields,
) -> QueryAs<'q, Sqlite, Spec, SqliteArguments<'q>> {
    query
        .bind(&fields.project_title)
        .bind(&fields.client_name)
        .bind(&fields.date)
        .bind(fields.quantity)
        .bind(fields.open_size_w)
        .bind(fields.open_size_h)
        .bind(fields.closed_size_w)
        .bind(fields.closed_size_h)
        .bind(&fields.orientation)
        .bind(&fields.page_count_type)
        .bind(fields.page_count)
        .bind(&fields.printing_sides)
        .bind(&fields.cover_paper)
        .bind(&fields.inner_paper)
        .bind(&fields.printing_type)
        .bind(&fields.cover_finish)
        .bind(&fields.foil_area)
        .bind(&fields.spot_uv_area)
        .bind(&fields.binding_type)
        .bind(fields.spine_thickness)
        .bind(&fields.creasing)
        .bind(&fields.trimming_notes)
        .bind(&fields.special_instructions)
        .bind(&fields.file_format)
        .bind(fields.bleed)
        .bind(fields.safe_zone)
        .bind(&fields.color_profile)
        .bind(&fields.keyline_image_url)
}

/// Provides CRUD operations for print-job specifications.
pub struct SpecRepo;

impl SpecRepo {
    /// Insert a new spec, returning the stored row.
    ///
    /// `created_at` and `updated_at` receive the same instant.
    pub async fn create(pool: &SqlitePool, input: &SpecFields) -> Result<Spec, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO specs ({FIELD_COLUMNS}, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                     ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {}",
            columns()
        );
        bind_fields(sqlx::query_as::<_, Spec>(&query), input)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a spec by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Spec>, sqlx::Error> {
        let query = format!("SELECT {} FROM specs WHERE id = ?", columns());
        sqlx::query_as::<_, Spec>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all specs, most recently created first.
    ///
    /// Rows created within the same clock tick fall back to ID order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Spec>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM specs ORDER BY created_at DESC, id DESC",
            columns()
        );
        sqlx::query_as::<_, Spec>(&query).fetch_all(pool).await
    }

    /// Merge `patch` onto the stored row and write the full row back.
    ///
    /// Fields absent from the patch keep their stored value. The ID and
    /// `created_at` are never changed; `updated_at` is restamped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        patch: &SpecPatch,
    ) -> Result<Option<Spec>, sqlx::Error> {
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let mut fields = current.fields;
        patch.apply_to(&mut fields);
        if patch.is_empty() {
            tracing::debug!(id, "Spec update with no fields, restamping only");
        }

        let updated_at = restamp(current.created_at);
        let query = format!(
            "UPDATE specs SET
                project_title = ?,
                client_name = ?,
                date = ?,
                quantity = ?,
                open_size_w = ?,
                open_size_h = ?,
                closed_size_w = ?,
                closed_size_h = ?,
                orientation = ?,
                page_count_type = ?,
                page_count = ?,
                printing_sides = ?,
                cover_paper = ?,
                inner_paper = ?,
                printing_type = ?,
                cover_finish = ?,
                foil_area = ?,
                spot_uv_area = ?,
                binding_type = ?,
                spine_thickness = ?,
                creasing = ?,
                trimming_notes = ?,
                special_instructions = ?,
                file_format = ?,
                bleed = ?,
                safe_zone = ?,
                color_profile = ?,
                keyline_image_url = ?,
                updated_at = ?
             WHERE id = ?
             RETURNING {}",
            columns()
        );
        bind_fields(sqlx::query_as::<_, Spec>(&query), &fields)
            .bind(updated_at)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a spec by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM specs WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Current time, clamped so it never precedes `created_at`.
fn restamp(created_at: Timestamp) -> Timestamp {
    Utc::now().max(created_at)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn field_columns_match_model() {
        let names: Vec<&str> = FIELD_COLUMNS
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(names.len(), 28);
        assert_eq!(names.first(), Some(&"project_title"));
        assert_eq!(names.last(), Some(&"keyline_image_url"));
    }

    #[test]
    fn restamp_never_precedes_creation() {
        let future = Utc::now() + Duration::hours(1);
        assert_eq!(restamp(future), future);

        let past = Utc::now() - Duration::hours(1);
        assert!(restamp(past) > past);
    }
}
