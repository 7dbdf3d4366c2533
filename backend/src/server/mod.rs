//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use hbnb::Trace;
#[cfg(debug_assertions)]
use hbnb::doc::ApiDoc;
use hbnb::domain::{HbnbFacade, Repositories};
use hbnb::inbound::http::state::HttpState;
use hbnb::inbound::http::{configure_api, json_config};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct the HTTP server over a fresh in-memory facade.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let facade = Arc::new(HbnbFacade::new(
        Repositories::in_memory(),
        Arc::new(DefaultClock),
    ));
    let http_state = web::Data::new(HttpState::new(facade));
    let bind_addr = (settings.host().to_owned(), settings.port());

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr.clone())?
        .run();
    info!(host = %bind_addr.0, port = bind_addr.1, "listening");
    Ok(server)
}
