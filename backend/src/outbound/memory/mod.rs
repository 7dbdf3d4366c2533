//! Process-memory storage adapters.

mod in_memory_repository;

pub use in_memory_repository::InMemoryRepository;

use crate::domain::Repositories;

impl Repositories {
    /// Fresh, empty in-memory stores for every entity kind.
    pub fn in_memory() -> Self {
        Self {
            users: Box::new(InMemoryRepository::new()),
            amenities: Box::new(InMemoryRepository::new()),
            places: Box::new(InMemoryRepository::new()),
            reviews: Box::new(InMemoryRepository::new()),
        }
    }
}
