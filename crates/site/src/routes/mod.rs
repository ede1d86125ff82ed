//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Dashboard (service catalog)
//! GET  /index                  - Landing page
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! GET  /signup                 - Signup page
//! POST /signup                 - Signup action
//! GET  /logout                 - Logout action
//!
//! # Catalog (requires auth)
//! GET  /service/{slug}         - Service detail (gateway-backed)
//!
//! # Cart & Orders (requires auth)
//! POST /add_to_cart            - Append a line item to the session cart
//! GET  /cart                   - Cart page with total and discounted total
//! GET  /orders                 - Order history
//! POST /place_order            - Submit the cart to the service backend
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod home;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::dashboard))
        .route("/index", get(home::index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", get(auth::logout))
        .route("/service/{slug}", get(catalog::show))
        .route("/add_to_cart", post(cart::add))
        .route("/cart", get(cart::show))
        .route("/orders", get(orders::list))
        .route("/place_order", post(orders::place_order))
}
