//! Facade coordinating the four entity repositories.
//!
//! Every write takes a single write lock over all repositories for its whole
//! duration, so reference checks and cascades (a review joining or leaving its
//! place's list) are never observed half-done. Reads share the lock.
//!
//! Lookups by identifier return `Option`/`bool` sentinels; the only error the
//! facade reports is [`ValidationError`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::ports::Repository;
use super::{
    Amenity, AmenityId, AmenityPatch, Entity, NewAmenity, NewPlace, NewReview, NewUser, Place,
    PlaceDetails, PlaceId, PlacePatch, PlaceUpdate, Review, ReviewId, ReviewPatch, User, UserId,
    UserPatch, ValidationError,
};

/// Storage handed to [`HbnbFacade::new`], one repository per entity kind.
pub struct Repositories {
    /// User store.
    pub users: Box<dyn Repository<User>>,
    /// Amenity store.
    pub amenities: Box<dyn Repository<Amenity>>,
    /// Place store.
    pub places: Box<dyn Repository<Place>>,
    /// Review store.
    pub reviews: Box<dyn Repository<Review>>,
}

/// Single entry point for inbound adapters.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use hbnb::domain::{Entity, HbnbFacade, NewAmenity, Repositories};
/// use mockable::DefaultClock;
///
/// let facade = HbnbFacade::new(Repositories::in_memory(), Arc::new(DefaultClock));
/// let wifi = facade
///     .create_amenity(NewAmenity { name: "Wi-Fi".into() })
///     .expect("valid amenity");
/// assert_eq!(facade.get_amenity(wifi.id()), Some(wifi));
/// ```
pub struct HbnbFacade {
    stores: RwLock<Repositories>,
    clock: Arc<dyn Clock + Send + Sync>,
}

/// Resolve a raw identifier against `repo`; unparsable ids never resolve.
fn resolve<E: Entity>(repo: &dyn Repository<E>, raw: &str) -> Option<E::Id> {
    raw.parse::<E::Id>().ok().filter(|id| repo.contains(id))
}

fn resolve_amenities(
    repo: &dyn Repository<Amenity>,
    raw: &[String],
) -> Result<Vec<AmenityId>, ValidationError> {
    raw.iter()
        .map(|id| resolve(repo, id).ok_or(ValidationError::amenity_not_found()))
        .collect()
}

fn ensure_email_free(stores: &Repositories, user: &User) -> Result<(), ValidationError> {
    let email = Value::from(user.email());
    match stores.users.get_by_attribute("email", &email) {
        Some(_) => Err(ValidationError::EmailAlreadyRegistered),
        None => Ok(()),
    }
}

fn build_place(
    stores: &Repositories,
    input: NewPlace,
    now: DateTime<Utc>,
) -> Result<Place, ValidationError> {
    let owner =
        resolve(&*stores.users, &input.owner_id).ok_or(ValidationError::owner_not_found())?;
    let amenities = resolve_amenities(&*stores.amenities, &input.amenities)?;
    Place::new(input, owner, amenities, now)
}

fn resolve_place_update(
    stores: &Repositories,
    update: PlaceUpdate,
) -> Result<PlacePatch, ValidationError> {
    let PlaceUpdate {
        title,
        description,
        price,
        latitude,
        longitude,
        owner_id,
        amenities,
    } = update;
    let owner = owner_id
        .as_deref()
        .map(|raw| resolve(&*stores.users, raw).ok_or(ValidationError::owner_not_found()))
        .transpose()?;
    let amenities = amenities
        .as_deref()
        .map(|raw| resolve_amenities(&*stores.amenities, raw))
        .transpose()?;
    Ok(PlacePatch {
        title,
        description,
        price,
        latitude,
        longitude,
        owner,
        amenities,
    })
}

fn build_review(
    stores: &Repositories,
    input: NewReview,
    now: DateTime<Utc>,
) -> Result<Review, ValidationError> {
    let user = resolve(&*stores.users, &input.user_id).ok_or(ValidationError::user_not_found())?;
    let place =
        resolve(&*stores.places, &input.place_id).ok_or(ValidationError::place_not_found())?;
    Review::new(input, user, place, now)
}

fn log_rejection(operation: &'static str) -> impl Fn(&ValidationError) {
    move |err| debug!(operation, error = %err, "write rejected")
}

impl HbnbFacade {
    /// Build a facade over the given repositories.
    pub fn new(repositories: Repositories, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            stores: RwLock::new(repositories),
            clock,
        }
    }

    // Writers commit only after validation succeeds, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Repositories> {
        self.stores.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Repositories> {
        self.stores.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Register a user. Fails with
    /// [`ValidationError::EmailAlreadyRegistered`] when the email is taken.
    pub fn create_user(&self, input: NewUser) -> Result<User, ValidationError> {
        let mut stores = self.write();
        let user = User::new(input, self.now())
            .and_then(|user| ensure_email_free(&stores, &user).map(|()| user))
            .inspect_err(log_rejection("create_user"))?;
        stores.users.add(user.clone())?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Fetch a user by identifier.
    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id)
    }

    /// Find a user by exact email address.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.read()
            .users
            .get_by_attribute("email", &Value::from(email.trim()))
    }

    /// Every user in registration order.
    pub fn get_all_users(&self) -> Vec<User> {
        self.read().users.get_all()
    }

    /// Apply a partial update. Email uniqueness is only checked on create.
    pub fn update_user(&self, id: UserId, patch: UserPatch) -> Result<Option<User>, ValidationError> {
        let now = self.now();
        let updated = self
            .write()
            .users
            .update(&id, patch, now)
            .inspect_err(log_rejection("update_user"))?;
        if updated.is_some() {
            debug!(user_id = %id, "user updated");
        }
        Ok(updated)
    }

    /// Create an amenity.
    pub fn create_amenity(&self, input: NewAmenity) -> Result<Amenity, ValidationError> {
        let amenity = Amenity::new(input, self.now()).inspect_err(log_rejection("create_amenity"))?;
        self.write().amenities.add(amenity.clone())?;
        info!(amenity_id = %amenity.id(), "amenity created");
        Ok(amenity)
    }

    /// Fetch an amenity by identifier.
    pub fn get_amenity(&self, id: AmenityId) -> Option<Amenity> {
        self.read().amenities.get(&id)
    }

    /// Every amenity in creation order.
    pub fn get_all_amenities(&self) -> Vec<Amenity> {
        self.read().amenities.get_all()
    }

    /// Rename an amenity.
    pub fn update_amenity(
        &self,
        id: AmenityId,
        patch: AmenityPatch,
    ) -> Result<Option<Amenity>, ValidationError> {
        let now = self.now();
        let updated = self
            .write()
            .amenities
            .update(&id, patch, now)
            .inspect_err(log_rejection("update_amenity"))?;
        if updated.is_some() {
            debug!(amenity_id = %id, "amenity updated");
        }
        Ok(updated)
    }

    /// Create a place after resolving its owner and every amenity.
    ///
    /// The owner is checked first, then amenities in order; the first
    /// unresolved reference fails the call and nothing is stored.
    pub fn create_place(&self, input: NewPlace) -> Result<Place, ValidationError> {
        let now = self.now();
        let mut stores = self.write();
        let place =
            build_place(&stores, input, now).inspect_err(log_rejection("create_place"))?;
        stores.places.add(place.clone())?;
        info!(place_id = %place.id(), owner_id = %place.owner(), "place created");
        Ok(place)
    }

    /// Fetch a place by identifier.
    pub fn get_place(&self, id: PlaceId) -> Option<Place> {
        self.read().places.get(&id)
    }

    /// Every place in creation order.
    pub fn get_all_places(&self) -> Vec<Place> {
        self.read().places.get_all()
    }

    /// Apply a partial update to a place.
    ///
    /// Returns `Ok(None)` for an unknown place before any reference is
    /// checked. A supplied amenity list replaces the current one wholesale.
    pub fn update_place(
        &self,
        id: PlaceId,
        update: PlaceUpdate,
    ) -> Result<Option<Place>, ValidationError> {
        let now = self.now();
        let mut stores = self.write();
        if !stores.places.contains(&id) {
            return Ok(None);
        }
        let updated = resolve_place_update(&stores, update)
            .and_then(|patch| stores.places.update(&id, patch, now))
            .inspect_err(log_rejection("update_place"))?;
        debug!(place_id = %id, "place updated");
        Ok(updated)
    }

    /// Place with its owner and amenities expanded.
    pub fn get_place_details(&self, id: PlaceId) -> Option<PlaceDetails> {
        let stores = self.read();
        let place = stores.places.get(&id)?;
        let owner = stores.users.get(&place.owner())?;
        let amenities = place
            .amenities()
            .iter()
            .filter_map(|amenity| stores.amenities.get(amenity))
            .collect();
        Some(PlaceDetails::assemble(place, owner, amenities))
    }

    /// Create a review and append it to its place's review list.
    ///
    /// The author is checked before the place.
    pub fn create_review(&self, input: NewReview) -> Result<Review, ValidationError> {
        let now = self.now();
        let mut stores = self.write();
        let review =
            build_review(&stores, input, now).inspect_err(log_rejection("create_review"))?;
        stores.reviews.add(review.clone())?;
        let review_id = review.id();
        let attached = stores
            .places
            .modify(&review.place(), &mut |place: &mut Place| place.attach_review(review_id, now));
        if !attached {
            warn!(review_id = %review_id, place_id = %review.place(), "reviewed place vanished before attach");
        }
        info!(review_id = %review_id, place_id = %review.place(), "review created");
        Ok(review)
    }

    /// Fetch a review by identifier.
    pub fn get_review(&self, id: ReviewId) -> Option<Review> {
        self.read().reviews.get(&id)
    }

    /// Every review in creation order.
    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.read().reviews.get_all()
    }

    /// Reviews of a place in the order they were written, or `None` when the
    /// place does not exist.
    pub fn get_reviews_by_place(&self, id: PlaceId) -> Option<Vec<Review>> {
        let stores = self.read();
        let place = stores.places.get(&id)?;
        Some(
            place
                .reviews()
                .iter()
                .filter_map(|review| stores.reviews.get(review))
                .collect(),
        )
    }

    /// Update a review's text or rating. Author and place never change.
    pub fn update_review(
        &self,
        id: ReviewId,
        patch: ReviewPatch,
    ) -> Result<Option<Review>, ValidationError> {
        let now = self.now();
        let updated = self
            .write()
            .reviews
            .update(&id, patch, now)
            .inspect_err(log_rejection("update_review"))?;
        if updated.is_some() {
            debug!(review_id = %id, "review updated");
        }
        Ok(updated)
    }

    /// Delete a review and prune it from its place. Returns `false` when no
    /// review has the identifier.
    pub fn delete_review(&self, id: ReviewId) -> bool {
        let now = self.now();
        let mut stores = self.write();
        let Some(review) = stores.reviews.get(&id) else {
            return false;
        };
        stores.reviews.delete(&id);
        let detached = stores
            .places
            .modify(&review.place(), &mut |place: &mut Place| place.detach_review(id, now));
        if !detached {
            warn!(review_id = %id, place_id = %review.place(), "deleted review pointed at a missing place");
        }
        debug!(review_id = %id, place_id = %review.place(), "review deleted");
        true
    }
}

#[cfg(test)]
mod tests;
