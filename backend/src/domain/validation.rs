//! Field-level validation shared by entity constructors and partial updates.
//!
//! Every settable entity field funnels through one of the helpers below, both
//! when the entity is first built and when a patch touches the field later, so
//! the two paths cannot drift apart.

use thiserror::Error;

/// Maximum length, in characters, of a user's first or last name.
pub const PERSON_NAME_MAX: usize = 50;
/// Maximum length, in characters, of a place title.
pub const PLACE_TITLE_MAX: usize = 100;
/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
/// Inclusive bounds for review ratings.
pub const RATING_RANGE: (u8, u8) = (1, 5);

/// Invalid caller input: a malformed field, a broken reference on write, or a
/// duplicate value for a unique field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is missing or blank once trimmed.
    #[error("{field} is required")]
    Required {
        /// Offending field.
        field: &'static str,
    },
    /// Field exceeds its maximum character count.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Offending field.
        field: &'static str,
        /// Maximum length in characters.
        max: usize,
    },
    /// Email lacks an `@` or a `.` in its domain part.
    #[error("email format is invalid")]
    InvalidEmail,
    /// Numeric field must be finite and strictly positive.
    #[error("{field} must be a positive number")]
    NotPositive {
        /// Offending field.
        field: &'static str,
    },
    /// Numeric field lies outside its inclusive bounds.
    #[error("{field} must be between {min:?} and {max:?}")]
    OutOfRange {
        /// Offending field.
        field: &'static str,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Rating lies outside its inclusive bounds.
    #[error("rating must be between {min} and {max}")]
    RatingOutOfRange {
        /// Lowest accepted rating.
        min: u8,
        /// Highest accepted rating.
        max: u8,
    },
    /// Another user already owns this email address.
    #[error("email already registered")]
    EmailAlreadyRegistered,
    /// A referenced record does not exist.
    #[error("{entity} not found")]
    ReferenceNotFound {
        /// Input field holding the reference.
        field: &'static str,
        /// Kind of record that was looked up.
        entity: &'static str,
    },
    /// A supplied attribute could not be decoded into the field's type.
    #[error("{field} is malformed: {message}")]
    Malformed {
        /// Offending key.
        field: String,
        /// Decoder message.
        message: String,
    },
    /// The repository already stores a record under this identifier.
    #[error("identifier {id} is already in use")]
    IdentifierInUse {
        /// Identifier already taken.
        id: String,
    },
}

impl ValidationError {
    /// Name of the offending field, when the failure concerns one.
    ///
    /// # Examples
    /// ```
    /// use hbnb::domain::ValidationError;
    ///
    /// assert_eq!(ValidationError::InvalidEmail.field(), Some("email"));
    /// assert_eq!(ValidationError::owner_not_found().field(), Some("owner_id"));
    /// ```
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::NotPositive { field }
            | Self::OutOfRange { field, .. }
            | Self::ReferenceNotFound { field, .. } => Some(*field),
            Self::InvalidEmail | Self::EmailAlreadyRegistered => Some("email"),
            Self::RatingOutOfRange { .. } => Some("rating"),
            Self::Malformed { field, .. } => Some(field.as_str()),
            Self::IdentifierInUse { .. } => None,
        }
    }

    /// The place owner could not be resolved.
    pub const fn owner_not_found() -> Self {
        Self::ReferenceNotFound {
            field: "owner_id",
            entity: "Owner",
        }
    }

    /// One of the listed amenities could not be resolved.
    pub const fn amenity_not_found() -> Self {
        Self::ReferenceNotFound {
            field: "amenities",
            entity: "Amenity",
        }
    }

    /// The reviewing user could not be resolved.
    pub const fn user_not_found() -> Self {
        Self::ReferenceNotFound {
            field: "user_id",
            entity: "User",
        }
    }

    /// The reviewed place could not be resolved.
    pub const fn place_not_found() -> Self {
        Self::ReferenceNotFound {
            field: "place_id",
            entity: "Place",
        }
    }
}

pub(crate) fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn bounded_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let text = required_text(field, value)?;
    if text.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(text)
}

pub(crate) fn optional_text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}

pub(crate) fn email(value: &str) -> Result<String, ValidationError> {
    let email = required_text("email", value)?;
    match email.rsplit_once('@') {
        Some((_, domain)) if domain.contains('.') => Ok(email),
        _ => Err(ValidationError::InvalidEmail),
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field })
    }
}

pub(crate) fn within(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<f64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, min, max })
    }
}

pub(crate) fn rating(value: i64) -> Result<u8, ValidationError> {
    let (min, max) = RATING_RANGE;
    u8::try_from(value)
        .ok()
        .filter(|rating| (min..=max).contains(rating))
        .ok_or(ValidationError::RatingOutOfRange { min, max })
}
