//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`; every worker shares the
//! same facade.

use std::sync::Arc;

use crate::domain::HbnbFacade;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Facade serving every route.
    pub facade: Arc<HbnbFacade>,
}

impl HttpState {
    /// Wrap a shared facade.
    pub fn new(facade: Arc<HbnbFacade>) -> Self {
        Self { facade }
    }
}
