//! User data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::{Entity, Record, record_attribute};
use super::ids::UserId;
use super::patch::UpdatePatch;
use super::validation::{self, PERSON_NAME_MAX, ValidationError};

/// Input for [`User::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email, unique across users.
    pub email: String,
    /// Grants administrative rights.
    pub is_admin: bool,
}

/// Partial update for a [`User`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New admin flag.
    pub is_admin: Option<bool>,
}

impl UpdatePatch for UserPatch {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "email", "is_admin"];
}

/// Registered user.
///
/// ## Invariants
/// - `first_name` and `last_name` are trimmed, non-empty and at most
///   [`PERSON_NAME_MAX`] characters.
/// - `email` is trimmed and has a dotted domain after its `@`.
///
/// Email uniqueness spans users and is therefore enforced by the facade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    #[serde(flatten)]
    record: Record<UserId>,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
}

fn person_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    validation::bounded_text(field, value, PERSON_NAME_MAX)
}

impl User {
    /// Validate every field and build a new user stamped with `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use hbnb::domain::{NewUser, User};
    ///
    /// let user = User::new(
    ///     NewUser {
    ///         first_name: " Ada ".into(),
    ///         last_name: "Lovelace".into(),
    ///         email: "ada@example.com".into(),
    ///         is_admin: false,
    ///     },
    ///     Utc::now(),
    /// )
    /// .expect("valid user");
    /// assert_eq!(user.first_name(), "Ada");
    /// ```
    pub fn new(input: NewUser, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let NewUser {
            first_name,
            last_name,
            email,
            is_admin,
        } = input;
        Ok(Self {
            first_name: person_name("first_name", &first_name)?,
            last_name: person_name("last_name", &last_name)?,
            email: validation::email(&email)?,
            is_admin,
            record: Record::new(now),
        })
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the user has administrative rights.
    pub fn is_admin(&self) -> bool {
        self.is_admin
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

impl Entity for User {
    type Id = UserId;
    type Patch = UserPatch;

    fn record(&self) -> &Record<UserId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<UserId> {
        &mut self.record
    }

    fn apply_update(&mut self, patch: UserPatch, now: DateTime<Utc>) -> Result<(), ValidationError> {
        let first_name = patch
            .first_name
            .map(|value| person_name("first_name", &value))
            .transpose()?;
        let last_name = patch
            .last_name
            .map(|value| person_name("last_name", &value))
            .transpose()?;
        let email = patch
            .email
            .map(|value| validation::email(&value))
            .transpose()?;

        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(is_admin) = patch.is_admin {
            self.is_admin = is_admin;
        }
        self.record.touch(now);
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "first_name" => Some(Value::from(self.first_name.as_str())),
            "last_name" => Some(Value::from(self.last_name.as_str())),
            "email" => Some(Value::from(self.email.as_str())),
            "is_admin" => Some(Value::Bool(self.is_admin)),
            other => record_attribute(&self.record, other),
        }
    }
}
