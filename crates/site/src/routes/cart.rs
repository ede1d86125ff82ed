//! Cart route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::{self, CartLine};
use crate::error::Result;
use crate::filters;
use crate::middleware::{FlashLevel, FlashMessage, RequireAuth, flash};
use crate::state::AppState;

/// Add-to-cart form data, posted from a service detail page.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub service: String,
    pub cost: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub lines: Vec<CartLine>,
    pub total: i64,
    pub discounted: i64,
    pub flash: Vec<FlashMessage>,
}

/// Append a line item to the session cart.
///
/// The submitted cost is stored as-is; it is coerced when the cart page
/// totals it.
#[instrument(skip_all, fields(service = %form.service))]
pub async fn add(
    RequireAuth(_user): RequireAuth,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    cart::add(
        &session,
        CartLine {
            service_name: form.service,
            cost: form.cost,
        },
    )
    .await?;

    flash::push(
        &session,
        FlashLevel::Success,
        "Service added to the cart successfully!",
    )
    .await?;

    Ok(Redirect::to("/cart").into_response())
}

/// Display the cart with its total and discounted total.
///
/// The discounted figure is display-only; checkout submits the line
/// items as stored.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    session: Session,
) -> Result<CartTemplate> {
    let lines = cart::lines(&session).await?;
    let total = cart::total(&lines)?;
    let discounted = state.discount().apply_discount(total);

    Ok(CartTemplate {
        lines,
        total,
        discounted,
        flash: flash::take(&session).await,
    })
}
