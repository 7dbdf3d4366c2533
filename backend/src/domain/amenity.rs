//! Amenity data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::{Entity, Record, record_attribute};
use super::ids::AmenityId;
use super::patch::UpdatePatch;
use super::validation::{self, ValidationError};

/// Input for [`Amenity::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAmenity {
    /// Display name.
    pub name: String,
}

/// Partial update for an [`Amenity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AmenityPatch {
    /// New display name.
    pub name: Option<String>,
}

impl UpdatePatch for AmenityPatch {
    const FIELDS: &'static [&'static str] = &["name"];
}

/// Facility a place can offer, such as Wi-Fi or parking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amenity {
    #[serde(flatten)]
    record: Record<AmenityId>,
    name: String,
}

impl Amenity {
    /// Build a new amenity; the name is trimmed and must not be blank.
    pub fn new(input: NewAmenity, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required_text("name", &input.name)?,
            record: Record::new(now),
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
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

impl Entity for Amenity {
    type Id = AmenityId;
    type Patch = AmenityPatch;

    fn record(&self) -> &Record<AmenityId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<AmenityId> {
        &mut self.record
    }

    fn apply_update(
        &mut self,
        patch: AmenityPatch,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if let Some(name) = patch.name {
            self.name = validation::required_text("name", &name)?;
        }
        self.record.touch(now);
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::from(self.name.as_str())),
            other => record_attribute(&self.record, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use rstest::rstest;

    fn amenity(name: &str) -> Result<Amenity, ValidationError> {
        Amenity::new(
            NewAmenity {
                name: name.to_owned(),
            },
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    #[rstest]
    #[case("Wi-Fi", "Wi-Fi")]
    #[case("  Parking ", "Parking")]
    fn name_is_trimmed(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(amenity(raw).expect("valid amenity").name(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("\t ")]
    fn blank_name_is_rejected(#[case] raw: &str) {
        assert_eq!(
            amenity(raw),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[rstest]
    fn rename_validates_and_touches() {
        let mut wifi = amenity("Wi-Fi").expect("valid amenity");
        let later = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::minutes(1);

        let result = wifi.apply_update(
            AmenityPatch {
                name: Some(" ".to_owned()),
            },
            later,
        );
        assert!(result.is_err());
        assert_eq!(wifi.updated_at(), DateTime::<Utc>::UNIX_EPOCH);

        wifi.apply_update(
            AmenityPatch {
                name: Some("Fibre Wi-Fi".to_owned()),
            },
            later,
        )
        .expect("valid rename");
        assert_eq!(wifi.name(), "Fibre Wi-Fi");
        assert_eq!(wifi.updated_at(), later);
    }
}
