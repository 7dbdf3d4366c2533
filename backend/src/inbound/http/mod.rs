//! JSON-over-HTTP adapter exposing the facade under `/api/v1`.
//!
//! Handlers hold no domain logic: they decode the request, make one facade
//! call and map the outcome onto a status code.

pub mod amenities;
pub mod error;
pub mod places;
pub mod reviews;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every API handler. Mount under the `/api/v1` scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use hbnb::inbound::http::{configure_api, json_config};
///
/// let _app = App::new()
///     .app_data(json_config())
///     .service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(amenities::create_amenity)
        .service(amenities::list_amenities)
        .service(amenities::get_amenity)
        .service(amenities::update_amenity)
        .service(places::create_place)
        .service(places::list_places)
        .service(places::get_place)
        .service(places::get_place_details)
        .service(places::list_place_reviews)
        .service(places::update_place)
        .service(reviews::create_review)
        .service(reviews::list_reviews)
        .service(reviews::get_review)
        .service(reviews::update_review)
        .service(reviews::delete_review);
}

/// JSON extractor configuration reporting undecodable bodies as
/// `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}
