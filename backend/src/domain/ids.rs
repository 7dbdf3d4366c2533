//! Typed identifiers for each entity kind.
//!
//! Identifiers are random UUIDs rendered as opaque strings on the wire. Each
//! entity gets its own newtype so a place reference can never be handed to a
//! user lookup by mistake.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behaviour shared by all entity identifiers.
pub trait EntityId:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// Generate a fresh identifier.
    fn random() -> Self;
}

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wrap an existing UUID.
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse a raw identifier, returning `None` when it can never match
            /// a stored record.
            pub fn parse(raw: &str) -> Option<Self> {
                Uuid::parse_str(raw).ok().map(Self)
            }

            /// Access the underlying UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl EntityId for $name {
            fn random() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_entity_id! {
    /// Stable identifier of a [`User`](crate::domain::User).
    UserId
}

define_entity_id! {
    /// Stable identifier of an [`Amenity`](crate::domain::Amenity).
    AmenityId
}

define_entity_id! {
    /// Stable identifier of a [`Place`](crate::domain::Place).
    PlaceId
}

define_entity_id! {
    /// Stable identifier of a [`Review`](crate::domain::Review).
    ReviewId
}
