//! Custom Askama template filters.

use std::fmt::Display;

/// Format an integer currency amount for display.
///
/// Usage in templates: `{{ total|money }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${value}"))
}
