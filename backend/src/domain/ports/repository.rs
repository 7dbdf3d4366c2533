//! Port abstraction for keyed entity storage.
//!
//! Repositories are synchronous: no implementation may suspend or perform
//! blocking I/O, and mutating calls take `&mut self` so the caller decides
//! how access is serialised.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::{Entity, ValidationError};

use super::define_port_error;

define_port_error! {
    /// Storage errors raised by repository adapters.
    pub enum RepositoryError {
        /// A record is already stored under the identifier.
        DuplicateId {
            /// Identifier already in use.
            id: String,
        } => "record {id} already exists",
    }
}

impl From<RepositoryError> for ValidationError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::DuplicateId { id } => Self::IdentifierInUse { id },
        }
    }
}

/// Keyed store for one entity type.
///
/// "Not found" is never an error here: lookups return `Option` and deletes
/// report whether anything was removed.
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert a new record under its identifier.
    fn add(&mut self, entity: E) -> Result<(), RepositoryError>;

    /// Fetch a record by identifier.
    fn get(&self, id: &E::Id) -> Option<E>;

    /// Report whether a record exists.
    fn contains(&self, id: &E::Id) -> bool {
        self.get(id).is_some()
    }

    /// Every record in insertion order.
    fn get_all(&self) -> Vec<E>;

    /// Apply a validated partial update in place.
    ///
    /// Returns `Ok(None)` when no record has the identifier. A validation
    /// failure leaves the stored record unchanged.
    fn update(
        &mut self,
        id: &E::Id,
        patch: E::Patch,
        now: DateTime<Utc>,
    ) -> Result<Option<E>, ValidationError>;

    /// Run `change` against the stored record. Returns `false` when no record
    /// has the identifier.
    fn modify(&mut self, id: &E::Id, change: &mut dyn FnMut(&mut E)) -> bool;

    /// Remove a record, returning whether one was present.
    fn delete(&mut self, id: &E::Id) -> bool;

    /// First record, in insertion order, whose attribute equals `value`.
    ///
    /// This is a linear scan, not an index lookup.
    fn get_by_attribute(&self, name: &str, value: &Value) -> Option<E>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
