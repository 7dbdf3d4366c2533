//! OpenAPI document for the REST API.
//!
//! Registers every `/api/v1` handler together with the schema wrappers from
//! [`crate::inbound::http::schemas`], which describe domain types without
//! coupling them to utoipa. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::amenities::CreateAmenityRequest;
use crate::inbound::http::places::CreatePlaceRequest;
use crate::inbound::http::reviews::{CreateReviewRequest, DeletedResponse};
use crate::inbound::http::schemas::{
    AmenitySchema, AmenityUpdateSchema, ErrorCodeSchema, ErrorSchema, PlaceDetailsSchema,
    PlaceSchema, PlaceUpdateSchema, ReviewSchema, ReviewUpdateSchema, UserSchema,
    UserUpdateSchema,
};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HBnB API",
        description = "Users, amenities, places and reviews backed by in-memory storage."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::amenities::create_amenity,
        crate::inbound::http::amenities::list_amenities,
        crate::inbound::http::amenities::get_amenity,
        crate::inbound::http::amenities::update_amenity,
        crate::inbound::http::places::create_place,
        crate::inbound::http::places::list_places,
        crate::inbound::http::places::get_place,
        crate::inbound::http::places::get_place_details,
        crate::inbound::http::places::list_place_reviews,
        crate::inbound::http::places::update_place,
        crate::inbound::http::reviews::create_review,
        crate::inbound::http::reviews::list_reviews,
        crate::inbound::http::reviews::get_review,
        crate::inbound::http::reviews::update_review,
        crate::inbound::http::reviews::delete_review,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        AmenitySchema,
        PlaceSchema,
        PlaceDetailsSchema,
        ReviewSchema,
        UserUpdateSchema,
        AmenityUpdateSchema,
        PlaceUpdateSchema,
        ReviewUpdateSchema,
        CreateUserRequest,
        CreateAmenityRequest,
        CreatePlaceRequest,
        CreateReviewRequest,
        DeletedResponse,
    )),
    tags(
        (name = "users", description = "User registration and profile updates"),
        (name = "amenities", description = "Amenities that places can offer"),
        (name = "places", description = "Places and their reviews"),
        (name = "reviews", description = "Reviews of places")
    )
)]
pub struct ApiDoc;
