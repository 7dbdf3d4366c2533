//! Place data model.
//!
//! A place references its owner and amenities by identifier and owns the
//! list of reviews written about it. The review list is only ever changed by
//! the facade's review cascades, hence the crate-private mutators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::{Entity, Record, record_attribute};
use super::ids::{AmenityId, PlaceId, ReviewId, UserId};
use super::patch::UpdatePatch;
use super::validation::{self, LATITUDE_RANGE, LONGITUDE_RANGE, PLACE_TITLE_MAX, ValidationError};
use super::{Amenity, User};

/// Input for creating a place through the facade.
///
/// `owner_id` and `amenities` are raw identifiers; the facade resolves them
/// before the place is built.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    /// Display title, trimmed on construction.
    pub title: String,
    /// Free-form description; absent means empty.
    pub description: Option<String>,
    /// Nightly price, strictly positive.
    pub price: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Identifier of the owning user.
    pub owner_id: String,
    /// Identifiers of offered amenities.
    pub amenities: Vec<String>,
}

/// Partial update for a place as received from callers, with unresolved
/// references.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New nightly price.
    pub price: Option<f64>,
    /// New latitude.
    pub latitude: Option<f64>,
    /// New longitude.
    pub longitude: Option<f64>,
    /// Identifier of the new owner.
    pub owner_id: Option<String>,
    /// Replacement amenity identifiers.
    pub amenities: Option<Vec<String>>,
}

impl UpdatePatch for PlaceUpdate {
    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "price",
        "latitude",
        "longitude",
        "owner_id",
        "amenities",
    ];
}

/// Partial update for a [`Place`] whose references are already resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New nightly price.
    pub price: Option<f64>,
    /// New latitude.
    pub latitude: Option<f64>,
    /// New longitude.
    pub longitude: Option<f64>,
    /// Resolved new owner.
    pub owner: Option<UserId>,
    /// Resolved replacement amenities.
    pub amenities: Option<Vec<AmenityId>>,
}

/// Rentable place.
///
/// ## Invariants
/// - `title` is trimmed, non-empty and at most [`PLACE_TITLE_MAX`] characters.
/// - `price` is finite and strictly positive.
/// - `latitude` lies in −90..=90 and `longitude` in −180..=180.
/// - `reviews` holds each review written about this place exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    #[serde(flatten)]
    record: Record<PlaceId>,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "owner_id")]
    owner: UserId,
    amenities: Vec<AmenityId>,
    reviews: Vec<ReviewId>,
}

fn id_list<I: ToString>(ids: &[I]) -> Value {
    Value::Array(ids.iter().map(|id| Value::from(id.to_string())).collect())
}

fn title(value: &str) -> Result<String, ValidationError> {
    validation::bounded_text("title", value, PLACE_TITLE_MAX)
}

fn price(value: f64) -> Result<f64, ValidationError> {
    validation::positive("price", value)
}

fn latitude(value: f64) -> Result<f64, ValidationError> {
    validation::within("latitude", value, LATITUDE_RANGE)
}

fn longitude(value: f64) -> Result<f64, ValidationError> {
    validation::within("longitude", value, LONGITUDE_RANGE)
}

impl Place {
    /// Validate every scalar field and build a new place.
    ///
    /// `owner` and `amenities` must already be resolved against their
    /// repositories; the raw identifiers in `input` are ignored.
    pub fn new(
        input: NewPlace,
        owner: UserId,
        amenities: Vec<AmenityId>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let NewPlace {
            title: raw_title,
            description,
            price: raw_price,
            latitude: raw_latitude,
            longitude: raw_longitude,
            owner_id: _,
            amenities: _,
        } = input;
        Ok(Self {
            title: title(&raw_title)?,
            description: validation::optional_text(description.as_deref()),
            price: price(raw_price)?,
            latitude: latitude(raw_latitude)?,
            longitude: longitude(raw_longitude)?,
            owner,
            amenities,
            reviews: Vec::new(),
            record: Record::new(now),
        })
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description, empty when none was given.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Nightly price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Identifier of the owning user.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// Amenity identifiers in the order they were supplied.
    pub fn amenities(&self) -> &[AmenityId] {
        &self.amenities
    }

    /// Review identifiers in creation order.
    pub fn reviews(&self) -> &[ReviewId] {
        &self.reviews
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.record.created_at()
    }

    /// Time of the last successful mutation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.record.updated_at()
    }

    pub(crate) fn attach_review(&mut self, review: ReviewId, now: DateTime<Utc>) {
        if !self.reviews.contains(&review) {
            self.reviews.push(review);
        }
        self.record.touch(now);
    }

    pub(crate) fn detach_review(&mut self, review: ReviewId, now: DateTime<Utc>) {
        self.reviews.retain(|existing| *existing != review);
        self.record.touch(now);
    }
}

impl Entity for Place {
    type Id = PlaceId;
    type Patch = PlacePatch;

    fn record(&self) -> &Record<PlaceId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<PlaceId> {
        &mut self.record
    }

    fn apply_update(&mut self, patch: PlacePatch, now: DateTime<Utc>) -> Result<(), ValidationError> {
        let PlacePatch {
            title: new_title,
            description,
            price: new_price,
            latitude: new_latitude,
            longitude: new_longitude,
            owner,
            amenities,
        } = patch;
        let new_title = new_title.as_deref().map(title).transpose()?;
        let new_price = new_price.map(price).transpose()?;
        let new_latitude = new_latitude.map(latitude).transpose()?;
        let new_longitude = new_longitude.map(longitude).transpose()?;

        if let Some(value) = new_title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = validation::optional_text(Some(&value));
        }
        if let Some(value) = new_price {
            self.price = value;
        }
        if let Some(value) = new_latitude {
            self.latitude = value;
        }
        if let Some(value) = new_longitude {
            self.longitude = value;
        }
        if let Some(value) = owner {
            self.owner = value;
        }
        if let Some(value) = amenities {
            self.amenities = value;
        }
        self.record.touch(now);
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "title" => Some(Value::from(self.title.as_str())),
            "description" => Some(Value::from(self.description.as_str())),
            "price" => Some(Value::from(self.price)),
            "latitude" => Some(Value::from(self.latitude)),
            "longitude" => Some(Value::from(self.longitude)),
            "owner_id" => Some(Value::from(self.owner.to_string())),
            "amenities" => Some(id_list(&self.amenities)),
            "reviews" => Some(id_list(&self.reviews)),
            other => record_attribute(&self.record, other),
        }
    }
}

/// Place with its owner and amenities expanded, for callers that want a
/// single nested view instead of issuing several lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetails {
    #[serde(flatten)]
    record: Record<PlaceId>,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    owner: User,
    amenities: Vec<Amenity>,
    reviews: Vec<ReviewId>,
}

impl PlaceDetails {
    pub(crate) fn assemble(place: Place, owner: User, amenities: Vec<Amenity>) -> Self {
        let Place {
            record,
            title,
            description,
            price,
            latitude,
            longitude,
            owner: _,
            amenities: _,
            reviews,
        } = place;
        Self {
            record,
            title,
            description,
            price,
            latitude,
            longitude,
            owner,
            amenities,
            reviews,
        }
    }

    /// Identifier of the expanded place.
    pub fn id(&self) -> PlaceId {
        self.record.id()
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Owning user.
    pub fn owner(&self) -> &User {
        &self.owner
    }

    /// Offered amenities.
    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    /// Review identifiers in creation order.
    pub fn reviews(&self) -> &[ReviewId] {
        &self.reviews
    }
}
