//! Domain entities, validation rules and the facade that keeps them
//! consistent.
//!
//! Public surface:
//! - [`User`], [`Amenity`], [`Place`], [`Review`] and their `New*` inputs and
//!   patch types.
//! - [`HbnbFacade`], the single entry point used by inbound adapters.
//! - [`ValidationError`], the only failure the facade reports, and
//!   [`Error`], the transport-facing payload it converts into.
//! - [`ports::Repository`], the storage port implemented in `outbound`.

pub mod amenity;
pub mod entity;
pub mod error;
pub mod facade;
pub mod ids;
pub mod patch;
pub mod place;
pub mod ports;
pub mod review;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::amenity::{Amenity, AmenityPatch, NewAmenity};
pub use self::entity::{Entity, Record};
pub use self::error::{Error, ErrorCode};
pub use self::facade::{HbnbFacade, Repositories};
pub use self::ids::{AmenityId, EntityId, PlaceId, ReviewId, UserId};
pub use self::patch::{AttributeMap, UpdatePatch, patch_from_attributes};
pub use self::place::{NewPlace, Place, PlaceDetails, PlacePatch, PlaceUpdate};
pub use self::review::{NewReview, Review, ReviewPatch};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserPatch};
pub use self::validation::ValidationError;
