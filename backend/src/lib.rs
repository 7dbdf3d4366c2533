//! HBnB backend: users, amenities, places and reviews held in memory behind
//! a facade that keeps their references consistent.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use middleware::Trace;
