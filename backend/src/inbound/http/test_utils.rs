//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;
use serde_json::{Value, json};

use super::state::HttpState;
use super::{configure_api, json_config};
use crate::Trace;
use crate::domain::{HbnbFacade, Repositories};

/// Fresh facade over empty in-memory stores.
pub(crate) fn facade() -> Arc<HbnbFacade> {
    Arc::new(HbnbFacade::new(
        Repositories::in_memory(),
        Arc::new(DefaultClock),
    ))
}

/// App serving the API over `facade`, wired like the real server.
pub(crate) fn test_app(
    facade: Arc<HbnbFacade>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(facade)))
        .app_data(json_config())
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
}

pub(crate) fn user_body(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
    })
}

pub(crate) fn place_body(owner_id: &str, amenities: &[&str]) -> Value {
    json!({
        "title": "Cosy cabin",
        "description": "Wood stove and a view",
        "price": 80.0,
        "latitude": 61.2,
        "longitude": 7.1,
        "owner_id": owner_id,
        "amenities": amenities,
    })
}
