//! Order domain type.

use chrono::{DateTime, Utc};

use homecraft_core::OrderId;

/// A placed order.
///
/// Created downstream of checkout by the service backend; immutable
/// thereafter and read via listing.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub product: String,
    pub quantity: i64,
    /// Integer-valued currency amount.
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}
