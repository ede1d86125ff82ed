//! Domain models for the site.

pub mod order;
pub mod service;
pub mod session;
pub mod user;

pub use order::Order;
pub use service::Service;
pub use session::CurrentUser;
pub use session::keys as session_keys;
pub use user::User;
