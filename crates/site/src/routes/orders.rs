//! Order route handlers.
//!
//! Checkout submits the session cart to the service backend. The cart is
//! cleared only after the backend confirms; any fault leaves it intact
//! so the user can retry.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::cart;
use crate::db::orders::OrderRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::{FlashLevel, FlashMessage, RequireAuth, flash};
use crate::models::Order;
use crate::state::AppState;

/// Order history template.
#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<Order>,
    pub flash: Vec<FlashMessage>,
}

/// Display the order history, newest first.
#[instrument(skip_all)]
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    session: Session,
) -> Result<OrdersTemplate> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;

    Ok(OrdersTemplate {
        orders,
        flash: flash::take(&session).await,
    })
}

/// Submit the session cart as an order.
///
/// On success the cart is cleared and the user lands on the order
/// history. On any gateway fault the cart is left unchanged and a
/// failure notice shows on the landing page.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn place_order(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<Response> {
    let lines = cart::lines(&session).await?;

    match state.gateway().add_order(user.id, &lines).await {
        Ok(()) => {
            cart::clear(&session).await?;
            flash::push(&session, FlashLevel::Success, "Order placed successfully!").await?;

            Ok(Redirect::to("/orders").into_response())
        }
        Err(e) => {
            tracing::warn!("Order submission failed: {e}");
            flash::push(
                &session,
                FlashLevel::Error,
                "Error placing order. Please try again later.",
            )
            .await?;

            Ok(Redirect::to("/index").into_response())
        }
    }
}
