//! Serde support for tri-state partial-update fields.
//!
//! A patch field is `Option<Option<T>>`:
//!
//! - key absent        -> `None` (keep the stored value)
//! - key set to `null` -> `Some(None)` (clear the stored value)
//! - key set to a value -> `Some(Some(v))`
//!
//! Plain serde collapses the last two cases for `null`, so patch fields use
//! `#[serde(default, deserialize_with = "printspec_core::patch::double_option")]`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present key (possibly `null`) into `Some(..)`.
///
/// Must be paired with `#[serde(default)]` so that absent keys become `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overlay a tri-state patch value onto a stored optional value.
pub fn overlay<T: Clone>(target: &mut Option<T>, patch: &Option<Option<T>>) {
    if let Some(value) = patch {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "double_option")]
        quantity: Option<Option<i64>>,
    }

    #[test]
    fn absent_key_is_none() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.quantity, None);
    }

    #[test]
    fn null_key_is_some_none() {
        let probe: Probe = serde_json::from_str(r#"{"quantity": null}"#).unwrap();
        assert_eq!(probe.quantity, Some(None));
    }

    #[test]
    fn value_key_is_some_some() {
        let probe: Probe = serde_json::from_str(r#"{"quantity": 250}"#).unwrap();
        assert_eq!(probe.quantity, Some(Some(250)));
    }

    #[test]
    fn mismatched_type_is_rejected() {
        let result = serde_json::from_str::<Probe>(r#"{"quantity": "ten"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn overlay_keeps_clears_and_replaces() {
        let mut value = Some(5);
        overlay(&mut value, &None);
        assert_eq!(value, Some(5));

        overlay(&mut value, &Some(Some(7)));
        assert_eq!(value, Some(7));

        overlay(&mut value, &Some(None));
        assert_eq!(value, None);
    }
}
