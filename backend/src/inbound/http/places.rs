//! Place HTTP handlers.
//!
//! ```text
//! POST /api/v1/places
//! GET  /api/v1/places
//! GET  /api/v1/places/{id}
//! GET  /api/v1/places/{id}/details
//! GET  /api/v1/places/{id}/reviews
//! PUT  /api/v1/places/{id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{
    AttributeMap, NewPlace, Place, PlaceDetails, PlaceId, PlaceUpdate, Review,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, PlaceDetailsSchema, PlaceSchema, PlaceUpdateSchema, ReviewSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{decode_patch, not_found, parse_path_id};

/// Request body for `POST /api/v1/places`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlaceRequest {
    /// Display title.
    #[schema(example = "Cosy cabin")]
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Nightly price.
    #[schema(example = 80.0)]
    pub price: f64,
    /// Latitude in degrees.
    #[schema(example = 61.2)]
    pub latitude: f64,
    /// Longitude in degrees.
    #[schema(example = 7.1)]
    pub longitude: f64,
    /// Identifier of an existing user.
    pub owner_id: String,
    /// Identifiers of existing amenities.
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl From<CreatePlaceRequest> for NewPlace {
    fn from(value: CreatePlaceRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            price: value.price,
            latitude: value.latitude,
            longitude: value.longitude,
            owner_id: value.owner_id,
            amenities: value.amenities,
        }
    }
}

/// Create a place owned by an existing user.
#[utoipa::path(
    post,
    path = "/api/v1/places",
    request_body = CreatePlaceRequest,
    responses(
        (status = 201, description = "Place created", body = PlaceSchema),
        (status = 400, description = "Invalid input or unknown owner/amenity", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "createPlace"
)]
#[post("/places")]
pub async fn create_place(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePlaceRequest>,
) -> ApiResult<HttpResponse> {
    let place = state.facade.create_place(payload.into_inner().into())?;
    Ok(HttpResponse::Created().json(place))
}

/// List places.
#[utoipa::path(
    get,
    path = "/api/v1/places",
    responses((status = 200, description = "Places", body = [PlaceSchema])),
    tags = ["places"],
    operation_id = "listPlaces"
)]
#[get("/places")]
pub async fn list_places(state: web::Data<HttpState>) -> web::Json<Vec<Place>> {
    web::Json(state.facade.get_all_places())
}

/// Fetch one place.
#[utoipa::path(
    get,
    path = "/api/v1/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Place", body = PlaceSchema),
        (status = 404, description = "Place not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "getPlace"
)]
#[get("/places/{id}")]
pub async fn get_place(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Place>> {
    let id: PlaceId = parse_path_id(&path, "Place")?;
    let place = state.facade.get_place(id).ok_or_else(|| not_found("Place"))?;
    Ok(web::Json(place))
}

/// Place with its owner and amenities inlined.
#[utoipa::path(
    get,
    path = "/api/v1/places/{id}/details",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Expanded place", body = PlaceDetailsSchema),
        (status = 404, description = "Place not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "getPlaceDetails"
)]
#[get("/places/{id}/details")]
pub async fn get_place_details(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PlaceDetails>> {
    let id: PlaceId = parse_path_id(&path, "Place")?;
    let details = state
        .facade
        .get_place_details(id)
        .ok_or_else(|| not_found("Place"))?;
    Ok(web::Json(details))
}

/// Reviews written about a place, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/places/{id}/reviews",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Reviews of the place", body = [ReviewSchema]),
        (status = 404, description = "Place not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "listPlaceReviews"
)]
#[get("/places/{id}/reviews")]
pub async fn list_place_reviews(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Review>>> {
    let id: PlaceId = parse_path_id(&path, "Place")?;
    let reviews = state
        .facade
        .get_reviews_by_place(id)
        .ok_or_else(|| not_found("Place"))?;
    Ok(web::Json(reviews))
}

/// Partially update a place. A supplied `amenities` list replaces the
/// current one.
#[utoipa::path(
    put,
    path = "/api/v1/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    request_body = PlaceUpdateSchema,
    responses(
        (status = 200, description = "Updated place", body = PlaceSchema),
        (status = 400, description = "Invalid input or unknown owner/amenity", body = ErrorSchema),
        (status = 404, description = "Place not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "updatePlace"
)]
#[put("/places/{id}")]
pub async fn update_place(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AttributeMap>,
) -> ApiResult<web::Json<Place>> {
    let id: PlaceId = parse_path_id(&path, "Place")?;
    let update: PlaceUpdate = decode_patch(&payload)?;
    let place = state
        .facade
        .update_place(id, update)?
        .ok_or_else(|| not_found("Place"))?;
    Ok(web::Json(place))
}
