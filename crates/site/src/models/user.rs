//! User domain type.
//!
//! Validated domain object, separate from the database row shape. The
//! password hash never leaves the db layer.

use chrono::{DateTime, Utc};

use homecraft_core::{Email, UserId};

/// A registered account.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique across accounts.
    pub username: String,
    /// User's email address, unique across accounts.
    pub email: Email,
    /// Full display name.
    pub name: String,
    /// Mobile number, unique across accounts.
    pub mobile_number: String,
    /// Whether the account has admin rights.
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
