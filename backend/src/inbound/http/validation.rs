//! Request decoding helpers shared by the handlers.

use std::str::FromStr;

use crate::domain::{AttributeMap, Error, UpdatePatch, patch_from_attributes};

/// `404` error naming the missing entity kind.
pub(crate) fn not_found(entity: &str) -> Error {
    Error::not_found(format!("{entity} not found"))
}

/// Parse a path identifier. A malformed identifier cannot name a stored
/// record, so it is reported as not found.
pub(crate) fn parse_path_id<I: FromStr>(raw: &str, entity: &str) -> Result<I, Error> {
    raw.parse().map_err(|_| not_found(entity))
}

/// Decode an update body through the patch type's allow-list.
pub(crate) fn decode_patch<P: UpdatePatch>(attributes: &AttributeMap) -> Result<P, Error> {
    patch_from_attributes(attributes).map_err(Error::from)
}
