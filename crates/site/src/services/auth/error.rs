//! Authentication errors.

use thiserror::Error;

use homecraft_core::EmailError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong username or password. Deliberately uniform for unknown
    /// users and bad passwords.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A unique field (username, email, mobile number) is already taken.
    #[error("user already exists")]
    UserAlreadyExists,

    /// The email address failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password does not meet requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// Hashing the password failed.
    #[error("failed to hash password")]
    PasswordHash,

    /// Underlying repository failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
