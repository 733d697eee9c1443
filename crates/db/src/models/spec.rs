//! Print-job specification model and DTOs.

use printspec_core::patch::{double_option, overlay};
use printspec_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The descriptive columns of a `specs` row.
///
/// Every field is nullable and carried through without semantic validation.
/// Doubles as the create DTO: omitted JSON keys are stored as `NULL`.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SpecFields {
    /// Job title shown in listings.
    pub project_title: Option<String>,
    pub client_name: Option<String>,
    /// Free-form job date as supplied by the client (not parsed).
    pub date: Option<String>,
    pub quantity: Option<i64>,
    /// Flat (unfolded) width.
    pub open_size_w: Option<f64>,
    pub open_size_h: Option<f64>,
    /// Finished (folded/bound) width.
    pub closed_size_w: Option<f64>,
    pub closed_size_h: Option<f64>,
    pub orientation: Option<String>,
    /// How `page_count` is counted, e.g. pages vs. leaves.
    pub page_count_type: Option<String>,
    pub page_count: Option<i64>,
    /// Single- or double-sided.
    pub printing_sides: Option<String>,
    pub cover_paper: Option<String>,
    pub inner_paper: Option<String>,
    pub printing_type: Option<String>,
    pub cover_finish: Option<String>,
    /// Description of the area receiving foil.
    pub foil_area: Option<String>,
    /// Description of the area receiving spot UV.
    pub spot_uv_area: Option<String>,
    pub binding_type: Option<String>,
    /// Spine thickness for bound products.
    pub spine_thickness: Option<f64>,
    pub creasing: Option<String>,
    pub trimming_notes: Option<String>,
    pub special_instructions: Option<String>,
    pub file_format: Option<String>,
    /// Bleed margin beyond the trim line.
    pub bleed: Option<f64>,
    /// Inner safe margin for live content.
    pub safe_zone: Option<f64>,
    pub color_profile: Option<String>,
    /// URL of the keyline reference image, usually one returned by the upload endpoint.
    pub keyline_image_url: Option<String>,
}

/// A row from the `specs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Spec {
    pub id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fields: SpecFields,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial field set for a merge update.
///
/// Absent keys keep the stored value, explicit `null` clears it. Keys that
/// are not descriptive fields (`id`, `created_at`, `updated_at`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub project_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub client_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub quantity: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub open_size_w: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub open_size_h: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub closed_size_w: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub closed_size_h: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub orientation: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub page_count_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub page_count: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub printing_sides: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_paper: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub inner_paper: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub printing_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_finish: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub foil_area: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub spot_uv_area: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub binding_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub spine_thickness: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub creasing: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub trimming_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub special_instructions: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub file_format: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub bleed: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub safe_zone: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub color_profile: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub keyline_image_url: Option<Option<String>>,
}

impl SpecPatch {
    /// Overlay the supplied fields onto `fields`, leaving the rest untouched.
    pub fn apply_to(&self, fields: &mut SpecFields) {
        overlay(&mut fields.project_title, &self.project_title);
        overlay(&mut fields.client_name, &self.client_name);
        overlay(&mut fields.date, &self.date);
        overlay(&mut fields.quantity, &self.quantity);
        overlay(&mut fields.open_size_w, &self.open_size_w);
        overlay(&mut fields.open_size_h, &self.open_size_h);
        overlay(&mut fields.closed_size_w, &self.closed_size_w);
        overlay(&mut fields.closed_size_h, &self.closed_size_h);
        overlay(&mut fields.orientation, &self.orientation);
        overlay(&mut fields.page_count_type, &self.page_count_type);
        overlay(&mut fields.page_count, &self.page_count);
        overlay(&mut fields.printing_sides, &self.printing_sides);
        overlay(&mut fields.cover_paper, &self.cover_paper);
        overlay(&mut fields.inner_paper, &self.inner_paper);
        overlay(&mut fields.printing_type, &self.printing_type);
        overlay(&mut fields.cover_finish, &self.cover_finish);
        overlay(&mut fields.foil_area, &self.foil_area);
        overlay(&mut fields.spot_uv_area, &self.spot_uv_area);
        overlay(&mut fields.binding_type, &self.binding_type);
        overlay(&mut fields.spine_thickness, &self.spine_thickness);
        overlay(&mut fields.creasing, &self.creasing);
        overlay(&mut fields.trimming_notes, &self.trimming_notes);
        overlay(&mut fields.special_instructions, &self.special_instructions);
        overlay(&mut fields.file_format, &self.file_format);
        overlay(&mut fields.bleed, &self.bleed);
        overlay(&mut fields.safe_zone, &self.safe_zone);
        overlay(&mut fields.color_profile, &self.color_profile);
        overlay(&mut fields.keyline_image_url, &self.keyline_image_url);
    }

    /// Returns `true` if the patch names no fields at all.
    pub fn is_empty(&self) -> bool {
        self.project_title.is_none()
            && self.client_name.is_none()
            && self.date.is_none()
            && self.quantity.is_none()
            && self.open_size_w.is_none()
            && self.open_size_h.is_none()
            && self.closed_size_w.is_none()
            && self.closed_size_h.is_none()
            && self.orientation.is_none()
            && self.page_count_type.is_none()
            && self.page_count.is_none()
            && self.printing_sides.is_none()
            && self.cover_paper.is_none()
            && self.inner_paper.is_none()
            && self.printing_type.is_none()
            && self.cover_finish.is_none()
            && self.foil_area.is_none()
            && self.spot_uv_area.is_none()
            && self.binding_type.is_none()
            && self.spine_thickness.is_none()
            && self.creasing.is_none()
            && self.trimming_notes.is_none()
            && self.special_instructions.is_none()
            && self.file_format.is_none()
            && self.bleed.is_none()
            && self.safe_zone.is_none()
            && self.color_profile.is_none()
            && self.keyline_image_url.is_none()
    }
}
