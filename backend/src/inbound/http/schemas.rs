//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their serialised shape and are registered with
//! utoipa under the domain type's name.

use serde_json::Value;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "latitude must be between -90.0 and 90.0")]
    message: String,
    /// Correlation identifier echoed in the `Trace-Id` header.
    trace_id: Option<String>,
    /// Offending field, when the failure concerns one.
    details: Option<Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    is_admin: bool,
}

/// OpenAPI schema for [`crate::domain::Amenity`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Amenity)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AmenitySchema {
    id: String,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    #[schema(example = "Wi-Fi")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::Place`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Place)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PlaceSchema {
    id: String,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    /// Identifier of the owning user.
    owner_id: String,
    /// Amenity identifiers.
    amenities: Vec<String>,
    /// Review identifiers, oldest first.
    reviews: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::PlaceDetails`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PlaceDetails)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PlaceDetailsSchema {
    id: String,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    owner: UserSchema,
    amenities: Vec<AmenitySchema>,
    reviews: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::Review`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Review)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewSchema {
    id: String,
    #[schema(format = DateTime)]
    created_at: String,
    #[schema(format = DateTime)]
    updated_at: String,
    text: String,
    #[schema(minimum = 1, maximum = 5)]
    rating: u8,
    user_id: String,
    place_id: String,
}

/// Accepted keys for `PUT /api/v1/users/{id}`. Other keys are ignored.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserUpdateSchema {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    is_admin: Option<bool>,
}

/// Accepted keys for `PUT /api/v1/amenities/{id}`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AmenityUpdateSchema {
    name: Option<String>,
}

/// Accepted keys for `PUT /api/v1/places/{id}`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PlaceUpdateSchema {
    title: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    owner_id: Option<String>,
    /// Replaces the current amenity list.
    amenities: Option<Vec<String>>,
}

/// Accepted keys for `PUT /api/v1/reviews/{id}`. Author and place are fixed.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewUpdateSchema {
    text: Option<String>,
    rating: Option<i64>,
}
