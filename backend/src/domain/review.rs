//! Review data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::{Entity, Record, record_attribute};
use super::ids::{PlaceId, ReviewId, UserId};
use super::patch::UpdatePatch;
use super::validation::{self, ValidationError};

/// Input for creating a review through the facade.
///
/// `user_id` and `place_id` are raw identifiers resolved by the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Review body.
    pub text: String,
    /// Rating from 1 to 5.
    pub rating: i64,
    /// Identifier of the reviewing user.
    pub user_id: String,
    /// Identifier of the reviewed place.
    pub place_id: String,
}

/// Partial update for a [`Review`].
///
/// Only the text and rating may change; a review is never moved to another
/// place or author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewPatch {
    /// New review body.
    pub text: Option<String>,
    /// New rating.
    pub rating: Option<i64>,
}

impl UpdatePatch for ReviewPatch {
    const FIELDS: &'static [&'static str] = &["text", "rating"];
}

/// A user's rating of a place.
///
/// ## Invariants
/// - `text` is trimmed and non-empty.
/// - `rating` lies in 1..=5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    #[serde(flatten)]
    record: Record<ReviewId>,
    text: String,
    rating: u8,
    #[serde(rename = "user_id")]
    user: UserId,
    #[serde(rename = "place_id")]
    place: PlaceId,
}

impl Review {
    /// Validate the text and rating and build a new review.
    ///
    /// `user` and `place` must already be resolved; the raw identifiers in
    /// `input` are ignored.
    pub fn new(
        input: NewReview,
        user: UserId,
        place: PlaceId,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            text: validation::required_text("text", &input.text)?,
            rating: validation::rating(input.rating)?,
            user,
            place,
            record: Record::new(now),
        })
    }

    /// Review body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rating from 1 to 5.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Author of the review.
    pub fn user(&self) -> UserId {
        self.user
    }

    /// Place the review was written about.
    pub fn place(&self) -> PlaceId {
        self.place
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.record.created_at()
    }

    /// Time of the last successful mutation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.record.updated_at()
    }
}

impl Entity for Review {
    type Id = ReviewId;
    type Patch = ReviewPatch;

    fn record(&self) -> &Record<ReviewId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<ReviewId> {
        &mut self.record
    }

    fn apply_update(&mut self, patch: ReviewPatch, now: DateTime<Utc>) -> Result<(), ValidationError> {
        let text = patch
            .text
            .map(|value| validation::required_text("text", &value))
            .transpose()?;
        let rating = patch.rating.map(validation::rating).transpose()?;

        if let Some(text) = text {
            self.text = text;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        self.record.touch(now);
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "text" => Some(Value::from(self.text.as_str())),
            "rating" => Some(Value::from(self.rating)),
            "user_id" => Some(Value::from(self.user.to_string())),
            "place_id" => Some(Value::from(self.place.to_string())),
            other => record_attribute(&self.record, other),
        }
    }
}
