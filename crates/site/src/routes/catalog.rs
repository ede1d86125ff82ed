//! Service detail route handler.
//!
//! One parameterized handler serves every catalog service page. Pricing
//! and descriptions come from the external backend on each view.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::gateway::ServiceDetails;
use crate::middleware::{FlashLevel, RequireAuth, flash};
use crate::state::AppState;

/// URL slugs and their backend service names.
const KNOWN_SERVICES: &[(&str, &str)] = &[
    ("flooring", "Flooring"),
    ("interior", "Interior"),
    ("roofing", "Roofing"),
    ("insulation", "Insulation"),
    ("plumbing", "Plumbing"),
    ("lawn", "Lawn"),
];

/// Service detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub details: ServiceDetails,
}

/// Display one service's details, fetched from the backend.
///
/// An unknown slug is a 404. A gateway fault surfaces as a notice on the
/// dashboard instead of a partially-rendered page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response> {
    let Some(&(_, service_name)) = KNOWN_SERVICES.iter().find(|(s, _)| *s == slug) else {
        return Err(AppError::NotFound(format!("service {slug}")));
    };

    match state.gateway().get_service_details(service_name).await {
        Ok(details) => Ok(ServiceTemplate { details }.into_response()),
        Err(e) => {
            tracing::warn!("Failed to fetch service details: {e}");
            flash::push(
                &session,
                FlashLevel::Error,
                "Error fetching service details. Please try again later.",
            )
            .await?;

            Ok(Redirect::to("/").into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slugs_map_to_capitalized_names() {
        for (slug, name) in KNOWN_SERVICES {
            assert_eq!(&slug.to_lowercase(), slug);
            assert_eq!(name.to_lowercase(), *slug);
        }
    }

    #[test]
    fn test_unknown_slug_is_absent() {
        assert!(!KNOWN_SERVICES.iter().any(|(s, _)| *s == "painting"));
    }
}
