//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use homecraft_core::{Email, UserId};

use super::RepositoryError;
use crate::models::user::User;

/// Fields required to create an account.
///
/// The password must already be hashed; the repository never sees
/// plaintext credentials.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a Email,
    pub name: &'a str,
    pub mobile_number: &'a str,
    pub password_hash: &'a str,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    name: String,
    mobile_number: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(User {
            id: UserId::new(self.id),
            username: self.username,
            email,
            name: self.name,
            mobile_number: self.mobile_number,
            is_admin: self.is_admin,
            created_at: self.created_at,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user and their password hash by username.
    ///
    /// Returns `None` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is invalid.
    pub async fn get_auth_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, (i64, String, String, String, String, String, bool, DateTime<Utc>)>(
            r"
            SELECT id, username, email, name, mobile_number, password_hash, is_admin, created_at
            FROM users
            WHERE username = ?
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        let Some((id, username, email, name, mobile_number, password_hash, is_admin, created_at)) =
            row
        else {
            return Ok(None);
        };

        let user = UserRow {
            id,
            username,
            email,
            name,
            mobile_number,
            is_admin,
            created_at,
        }
        .into_user()?;

        Ok(Some((user, password_hash)))
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username, email, or
    /// mobile number already exists; the insert is rolled back.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_user: NewUser<'_>) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (username, email, name, mobile_number, password_hash)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, username, email, name, mobile_number, is_admin, created_at
            ",
        )
        .bind(new_user.username)
        .bind(new_user.email.as_str())
        .bind(new_user.name)
        .bind(new_user.mobile_number)
        .bind(new_user.password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(
                    "username, email or mobile number already exists".to_owned(),
                );
            }
            RepositoryError::Database(e)
        })?;

        row.into_user()
    }
}
