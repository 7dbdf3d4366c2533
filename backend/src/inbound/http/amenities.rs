//! Amenity HTTP handlers.
//!
//! ```text
//! POST /api/v1/amenities
//! GET  /api/v1/amenities
//! GET  /api/v1/amenities/{id}
//! PUT  /api/v1/amenities/{id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Amenity, AmenityId, AmenityPatch, AttributeMap, NewAmenity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AmenitySchema, AmenityUpdateSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{decode_patch, not_found, parse_path_id};

/// Request body for `POST /api/v1/amenities`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAmenityRequest {
    /// Display name.
    #[schema(example = "Wi-Fi")]
    pub name: String,
}

impl From<CreateAmenityRequest> for NewAmenity {
    fn from(value: CreateAmenityRequest) -> Self {
        Self { name: value.name }
    }
}

/// Create an amenity.
#[utoipa::path(
    post,
    path = "/api/v1/amenities",
    request_body = CreateAmenityRequest,
    responses(
        (status = 201, description = "Amenity created", body = AmenitySchema),
        (status = 400, description = "Invalid input", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "createAmenity"
)]
#[post("/amenities")]
pub async fn create_amenity(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAmenityRequest>,
) -> ApiResult<HttpResponse> {
    let amenity = state.facade.create_amenity(payload.into_inner().into())?;
    Ok(HttpResponse::Created().json(amenity))
}

/// List amenities.
#[utoipa::path(
    get,
    path = "/api/v1/amenities",
    responses((status = 200, description = "Amenities", body = [AmenitySchema])),
    tags = ["amenities"],
    operation_id = "listAmenities"
)]
#[get("/amenities")]
pub async fn list_amenities(state: web::Data<HttpState>) -> web::Json<Vec<Amenity>> {
    web::Json(state.facade.get_all_amenities())
}

/// Fetch one amenity.
#[utoipa::path(
    get,
    path = "/api/v1/amenities/{id}",
    params(("id" = String, Path, description = "Amenity identifier")),
    responses(
        (status = 200, description = "Amenity", body = AmenitySchema),
        (status = 404, description = "Amenity not found", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "getAmenity"
)]
#[get("/amenities/{id}")]
pub async fn get_amenity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Amenity>> {
    let id: AmenityId = parse_path_id(&path, "Amenity")?;
    let amenity = state
        .facade
        .get_amenity(id)
        .ok_or_else(|| not_found("Amenity"))?;
    Ok(web::Json(amenity))
}

/// Partially update an amenity.
#[utoipa::path(
    put,
    path = "/api/v1/amenities/{id}",
    params(("id" = String, Path, description = "Amenity identifier")),
    request_body = AmenityUpdateSchema,
    responses(
        (status = 200, description = "Updated amenity", body = AmenitySchema),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 404, description = "Amenity not found", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "updateAmenity"
)]
#[put("/amenities/{id}")]
pub async fn update_amenity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AttributeMap>,
) -> ApiResult<web::Json<Amenity>> {
    let id: AmenityId = parse_path_id(&path, "Amenity")?;
    let patch: AmenityPatch = decode_patch(&payload)?;
    let amenity = state
        .facade
        .update_amenity(id, patch)?
        .ok_or_else(|| not_found("Amenity"))?;
    Ok(web::Json(amenity))
}
