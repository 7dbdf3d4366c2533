//! Hash-map backed [`Repository`] keeping insertion order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{Entity, ValidationError};

/// In-memory repository for a single entity type.
///
/// Lookups by identifier are O(1); listing and attribute lookups walk the
/// records in insertion order. The type holds no lock of its own.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use hbnb::domain::ports::Repository;
/// use hbnb::domain::{Amenity, Entity, NewAmenity};
/// use hbnb::outbound::memory::InMemoryRepository;
///
/// let mut repo = InMemoryRepository::<Amenity>::new();
/// let wifi = Amenity::new(NewAmenity { name: "Wi-Fi".into() }, Utc::now()).expect("valid");
/// repo.add(wifi.clone()).expect("fresh id");
/// assert_eq!(repo.get(&wifi.id()), Some(wifi));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E: Entity> {
    records: HashMap<E::Id, E>,
    order: Vec<E::Id>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn add(&mut self, entity: E) -> Result<(), RepositoryError> {
        let id = entity.id();
        if self.records.contains_key(&id) {
            return Err(RepositoryError::duplicate_id(id.to_string()));
        }
        self.records.insert(id, entity);
        self.order.push(id);
        Ok(())
    }

    fn get(&self, id: &E::Id) -> Option<E> {
        self.records.get(id).cloned()
    }

    fn contains(&self, id: &E::Id) -> bool {
        self.records.contains_key(id)
    }

    fn get_all(&self) -> Vec<E> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    fn update(
        &mut self,
        id: &E::Id,
        patch: E::Patch,
        now: DateTime<Utc>,
    ) -> Result<Option<E>, ValidationError> {
        let Some(entity) = self.records.get_mut(id) else {
            return Ok(None);
        };
        entity.apply_update(patch, now)?;
        Ok(Some(entity.clone()))
    }

    fn modify(&mut self, id: &E::Id, change: &mut dyn FnMut(&mut E)) -> bool {
        match self.records.get_mut(id) {
            Some(entity) => {
                change(entity);
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: &E::Id) -> bool {
        if self.records.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }

    fn get_by_attribute(&self, name: &str, value: &Value) -> Option<E> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .find(|entity| entity.attribute(name).as_ref() == Some(value))
            .cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
