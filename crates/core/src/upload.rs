//! Naming rules for uploaded reference files.
//!
//! Stored files are named `<millis>-<sanitized original name>` and served
//! back under [`UPLOAD_URL_PREFIX`].

use std::sync::LazyLock;

use regex::Regex;

/// URL path prefix under which the upload directory is served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Name used when the client sends a file part without a filename.
pub const DEFAULT_UPLOAD_NAME: &str = "upload";

/// Anything outside ASCII word characters, dot, and hyphen.
static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]").expect("valid regex"));

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
///
/// Each offending character becomes exactly one underscore, so the output has
/// the same number of characters as the input. An empty name becomes
/// [`DEFAULT_UPLOAD_NAME`].
pub fn sanitize_filename(original: &str) -> String {
    if original.is_empty() {
        return DEFAULT_UPLOAD_NAME.to_string();
    }
    UNSAFE_CHARS_RE.replace_all(original, "_").into_owned()
}

/// Build the on-disk filename for an upload received at `millis` (Unix epoch).
pub fn stored_filename(millis: i64, original: &str) -> String {
    format!("{millis}-{}", sanitize_filename(original))
}

/// Public URL path for a stored filename.
pub fn upload_url(stored: &str) -> String {
    format!("{UPLOAD_URL_PREFIX}/{stored}")
}
