//! Landing and dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::db::services::ServiceRepository;
use crate::error::Result;
use crate::middleware::{FlashMessage, OptionalAuth, flash};
use crate::models::{CurrentUser, Service};
use crate::state::AppState;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub user: Option<CurrentUser>,
    pub flash: Vec<FlashMessage>,
}

/// Dashboard template listing the service catalog.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user: Option<CurrentUser>,
    pub services: Vec<Service>,
    pub flash: Vec<FlashMessage>,
}

/// Display the landing page.
pub async fn index(OptionalAuth(user): OptionalAuth, session: Session) -> IndexTemplate {
    IndexTemplate {
        user,
        flash: flash::take(&session).await,
    }
}

/// Display the dashboard with the service catalog.
#[instrument(skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Result<DashboardTemplate> {
    let services = ServiceRepository::new(state.pool()).list_all().await?;

    Ok(DashboardTemplate {
        user,
        services,
        flash: flash::take(&session).await,
    })
}
