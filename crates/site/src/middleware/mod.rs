//! Request middleware: session layer, authentication gate, flash notices.

pub mod auth;
pub mod flash;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_session, set_current_user};
pub use flash::{FlashLevel, FlashMessage};
pub use session::create_session_layer;
