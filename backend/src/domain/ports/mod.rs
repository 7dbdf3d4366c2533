//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod repository;

pub use repository::{Repository, RepositoryError};
