//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use homecraft_core::UserId;

/// Session-stored user identity.
///
/// The explicit session-context object for the logged-in user: the
/// numeric id is resolved once at login time and carried here, together
/// with the username and admin flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID, resolved at login.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Whether the account has admin rights.
    pub admin: bool,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the cart line item sequence.
    pub const CART: &str = "cart";

    /// Key for pending flash notices.
    pub const FLASH: &str = "flash";
}
