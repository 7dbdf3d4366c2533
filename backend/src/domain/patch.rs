//! Partial-update decoding with explicit per-entity allow-lists.
//!
//! Transport payloads often echo server-managed keys (`id`, timestamps) or
//! relationship keys that may not be reassigned. Each update type lists the
//! keys it accepts; everything else is dropped before decoding.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

use super::ValidationError;

/// Plain attribute mapping as received from a transport adapter.
pub type AttributeMap = Map<String, Value>;

/// Partial update with an explicit allow-list of settable keys.
pub trait UpdatePatch: DeserializeOwned + Default {
    /// Keys this update accepts. Any other key is ignored.
    const FIELDS: &'static [&'static str];
}

/// Decode a partial update from an attribute map.
///
/// Keys outside [`UpdatePatch::FIELDS`] are ignored and `null` values count as
/// absent. A value of the wrong type fails with
/// [`ValidationError::Malformed`] naming the key.
///
/// # Examples
/// ```
/// use hbnb::domain::{AttributeMap, ReviewPatch, patch_from_attributes};
/// use serde_json::json;
///
/// let attributes: AttributeMap = serde_json::from_value(json!({
///     "rating": 4,
///     "place_id": "ignored",
/// }))
/// .expect("object");
/// let patch: ReviewPatch = patch_from_attributes(&attributes).expect("valid patch");
/// assert_eq!(patch.rating, Some(4));
/// assert!(patch.text.is_none());
/// ```
pub fn patch_from_attributes<P: UpdatePatch>(attributes: &AttributeMap) -> Result<P, ValidationError> {
    let mut allowed = AttributeMap::new();
    for (key, value) in attributes {
        if !P::FIELDS.contains(&key.as_str()) {
            trace!(key = %key, "ignoring attribute outside update allow-list");
            continue;
        }
        if value.is_null() {
            continue;
        }
        let single = Map::from_iter([(key.clone(), value.clone())]);
        serde_json::from_value::<P>(Value::Object(single)).map_err(|err| {
            ValidationError::Malformed {
                field: key.clone(),
                message: err.to_string(),
            }
        })?;
        allowed.insert(key.clone(), value.clone());
    }

    serde_json::from_value(Value::Object(allowed)).map_err(|err| ValidationError::Malformed {
        field: "body".to_owned(),
        message: err.to_string(),
    })
}
