//! Catalog service domain type.

use homecraft_core::ServiceId;

/// A static catalog entry.
///
/// Details and pricing live in the external service backend; this row
/// only drives the dashboard listing.
#[derive(Debug, Clone)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: Option<String>,
}

impl Service {
    /// URL slug for the service page, e.g. "Flooring" -> "flooring".
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_lowercased_name() {
        let service = Service {
            id: ServiceId::new(1),
            name: "Flooring".to_string(),
            description: None,
        };
        assert_eq!(service.slug(), "flooring");
    }
}
