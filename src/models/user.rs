use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// One row from `users`. Serialized as-is for every success response, so
/// nullable columns always appear in the body (as JSON null when unset).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /users. `email` is the only required field.
///
/// Required fields are `Option` here so that a missing key surfaces as an
/// aggregated validation message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
}

/// Body of PUT /users/{id}: a full replace, not a merge. Every key must be
/// present in the payload; nullable fields may carry an explicit null.
#[derive(Debug, Deserialize)]
pub struct ReplaceUser {
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub birth_date: Option<Option<DateTime<Utc>>>,
}

/// Body of PATCH /users/{id}. The outer `Option` is "was the key present",
/// the inner one is the value: `None` = leave the column alone,
/// `Some(None)` = clear it, `Some(Some(v))` = set it to `v`.
#[derive(Debug, Default, Deserialize)]
pub struct PatchUser {
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub birth_date: Option<Option<DateTime<Utc>>>,
}

/// Keeps explicit-null distinct from key-absent: serde only calls this when
/// the key exists, and `#[serde(default)]` fills the outer `None` otherwise.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

impl CreateUser {
    /// Runs every field rule and aggregates the failures into one error.
    /// On success returns the email, which is guaranteed present.
    pub fn validate(&self) -> Result<&str, AppError> {
        let mut errors = Vec::new();

        let email = match self.email.as_deref() {
            Some(e) => {
                check_email(e, &mut errors);
                Some(e)
            }
            None => {
                errors.push("email: field is required".to_string());
                None
            }
        };
        check_name(self.name.as_deref(), &mut errors);
        check_phone(self.phone.as_deref(), &mut errors);
        check_address(self.address.as_deref(), &mut errors);

        match (email, errors.is_empty()) {
            (Some(e), true) => Ok(e),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

impl ReplaceUser {
    pub fn validate(&self) -> Result<&str, AppError> {
        let mut errors = Vec::new();

        let email = match self.email.as_deref() {
            Some(e) => {
                check_email(e, &mut errors);
                Some(e)
            }
            None => {
                errors.push("email: field is required and must not be null".to_string());
                None
            }
        };
        match &self.name {
            None => errors.push("name: field is required (null is allowed)".to_string()),
            Some(name) => check_name(name.as_deref(), &mut errors),
        }
        match &self.phone {
            None => errors.push("phone: field is required (null is allowed)".to_string()),
            Some(phone) => check_phone(phone.as_deref(), &mut errors),
        }
        match &self.address {
            None => errors.push("address: field is required (null is allowed)".to_string()),
            Some(address) => check_address(address.as_deref(), &mut errors),
        }
        if self.birth_date.is_none() {
            errors.push("birth_date: field is required (null is allowed)".to_string());
        }

        match (email, errors.is_empty()) {
            (Some(e), true) => Ok(e),
            _ => Err(AppError::Validation(errors)),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|v| v.as_deref())
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_ref().and_then(|v| v.as_deref())
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_ref().and_then(|v| v.as_deref())
    }

    pub fn birth_date(&self) -> Option<DateTime<Utc>> {
        self.birth_date.flatten()
    }
}

impl PatchUser {
    /// True when no recognized key was present in the payload.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.birth_date.is_none()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let mut errors = Vec::new();
        match &self.email {
            None => {}
            // Column is NOT NULL; reject instead of forwarding to the store.
            Some(None) => errors.push("email: must not be null".to_string()),
            Some(Some(e)) => check_email(e, &mut errors),
        }
        if let Some(name) = &self.name {
            check_name(name.as_deref(), &mut errors);
        }
        if let Some(phone) = &self.phone {
            check_phone(phone.as_deref(), &mut errors);
        }
        if let Some(address) = &self.address {
            check_address(address.as_deref(), &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn check_email(email: &str, errors: &mut Vec<String>) {
    if email.chars().count() > 255 {
        errors.push("email: must be at most 255 characters".to_string());
    }
    if !EMAIL_RE.is_match(email) {
        errors.push("email: invalid email address".to_string());
    }
}

fn check_name(name: Option<&str>, errors: &mut Vec<String>) {
    if let Some(name) = name {
        let len = name.chars().count();
        if len < 1 || len > 100 {
            errors.push("name: must be between 1 and 100 characters".to_string());
        }
    }
}

fn check_phone(phone: Option<&str>, errors: &mut Vec<String>) {
    if let Some(phone) = phone {
        if phone.chars().count() > 20 {
            errors.push("phone: must be at most 20 characters".to_string());
        }
    }
}

fn check_address(address: Option<&str>, errors: &mut Vec<String>) {
    if let Some(address) = address {
        if address.chars().count() > 255 {
            errors.push("address: must be at most 255 characters".to_string());
        }
    }
}
