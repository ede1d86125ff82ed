//! Session-backed one-shot flash notices.
//!
//! Handlers push a notice before redirecting; the next rendered page
//! drains and displays it.

use serde::{Deserialize, Serialize};
use tower_sessions::{Session, session};

use crate::models::session_keys;

/// Notice severity, mapped to a CSS class at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    /// CSS class used by the templates.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "flash-success",
            Self::Error => "flash-error",
        }
    }
}

/// A pending notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

/// Queue a notice for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn push(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> Result<(), session::Error> {
    let mut pending = session
        .get::<Vec<FlashMessage>>(session_keys::FLASH)
        .await?
        .unwrap_or_default();

    pending.push(FlashMessage {
        level,
        message: message.into(),
    });

    session.insert(session_keys::FLASH, pending).await
}

/// Drain all pending notices. Best effort: store failures read as no
/// notices rather than failing the render.
pub async fn take(session: &Session) -> Vec<FlashMessage> {
    session
        .remove::<Vec<FlashMessage>>(session_keys::FLASH)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes() {
        assert_eq!(FlashLevel::Success.css_class(), "flash-success");
        assert_eq!(FlashLevel::Error.css_class(), "flash-error");
    }
}
