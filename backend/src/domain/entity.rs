//! Base record and the entity contract consumed by repositories.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::ValidationError;
use super::ids::EntityId;

/// Identity and audit timestamps shared by every entity.
///
/// ## Invariants
/// - `id` is generated once and never changes.
/// - `created_at` is set once; `updated_at` never moves backwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<I> {
    id: I,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<I: EntityId> Record<I> {
    /// Start a new record with a fresh identifier.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: I::random(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> I {
        self.id
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last successful mutation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Refresh the last-update timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}

/// Domain record stored by a [`Repository`](crate::domain::ports::Repository).
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type keying the record.
    type Id: EntityId;
    /// Validated partial update accepted by [`Entity::apply_update`].
    type Patch;

    /// Identity and timestamps.
    fn record(&self) -> &Record<Self::Id>;

    /// Mutable access to identity and timestamps.
    fn record_mut(&mut self) -> &mut Record<Self::Id>;

    /// Validate every supplied field, then commit them all and refresh the
    /// update timestamp. On error the entity is left untouched.
    fn apply_update(&mut self, patch: Self::Patch, now: DateTime<Utc>)
    -> Result<(), ValidationError>;

    /// Single field as plain data, used for equality lookups.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Stable identifier.
    fn id(&self) -> Self::Id {
        self.record().id()
    }

    /// Refresh the update timestamp.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.record_mut().touch(now);
    }
}

/// Look up the audit attributes every entity shares.
pub(crate) fn record_attribute<I: EntityId>(record: &Record<I>, name: &str) -> Option<Value> {
    match name {
        "id" => Some(Value::String(record.id().to_string())),
        "created_at" => Some(Value::String(record.created_at().to_rfc3339())),
        "updated_at" => Some(Value::String(record.updated_at().to_rfc3339())),
        _ => None,
    }
}
