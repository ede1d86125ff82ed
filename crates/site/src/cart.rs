//! Session-scoped shopping cart.
//!
//! The cart lives entirely inside the session: an ordered sequence of
//! line items, lazily initialized on first use and cleared by checkout.
//! Every add appends a new line, even for a duplicate service.
//!
//! Mutation is a read-modify-write against the session store with no
//! cross-request locking. Two rapid additions from the same browser can
//! race and one of them lose (last write wins at the store layer).

use serde::{Deserialize, Serialize};
use tower_sessions::{Session, session};

use crate::models::session_keys;

/// One pending (service, cost) pair.
///
/// The cost is kept exactly as submitted by the client; coercion to an
/// integer amount is deferred to [`total`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub service_name: String,
    pub cost: String,
}

/// Errors from cart computations.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// A line item cost could not be coerced to an integer amount.
    #[error("cart line cost {0:?} is not an integer")]
    MalformedCost(String),

    /// Summing the line item costs overflowed.
    #[error("cart total is out of range")]
    TotalOverflow,
}

/// Read the cart line items from the session, oldest first.
///
/// An absent cart reads as empty.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn lines(session: &Session) -> Result<Vec<CartLine>, session::Error> {
    Ok(session
        .get::<Vec<CartLine>>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Append a line item to the end of the session cart.
///
/// No validation is applied to the cost here; callers must coerce, and a
/// malformed cost surfaces later from [`total`].
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn add(session: &Session, line: CartLine) -> Result<(), session::Error> {
    let mut cart = lines(session).await?;
    cart.push(line);
    session.insert(session_keys::CART, cart).await
}

/// Remove all line items. Idempotent.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear(session: &Session) -> Result<(), session::Error> {
    session.remove::<Vec<CartLine>>(session_keys::CART).await?;
    Ok(())
}

/// Sum the costs across all line items, coercing each to an integer.
///
/// Returns 0 for an empty cart.
///
/// # Errors
///
/// Returns `CartError::MalformedCost` if any cost is not
/// integer-coercible, or `CartError::TotalOverflow` if the sum leaves
/// the i64 range.
pub fn total(lines: &[CartLine]) -> Result<i64, CartError> {
    lines.iter().try_fold(0_i64, |acc, line| {
        let cost = line
            .cost
            .trim()
            .parse::<i64>()
            .map_err(|_| CartError::MalformedCost(line.cost.clone()))?;
        acc.checked_add(cost).ok_or(CartError::TotalOverflow)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(service_name: &str, cost: &str) -> CartLine {
        CartLine {
            service_name: service_name.to_string(),
            cost: cost.to_string(),
        }
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        assert_eq!(total(&[]).unwrap(), 0);
    }

    #[test]
    fn test_total_sums_costs() {
        let cart = vec![line("Flooring", "100"), line("Roofing", "50")];
        assert_eq!(total(&cart).unwrap(), 150);
    }

    #[test]
    fn test_total_order_independent() {
        let forward = vec![line("Flooring", "100"), line("Roofing", "50")];
        let backward = vec![line("Roofing", "50"), line("Flooring", "100")];
        assert_eq!(total(&forward).unwrap(), total(&backward).unwrap());
    }

    #[test]
    fn test_duplicate_services_are_separate_lines() {
        let cart = vec![line("Flooring", "100"), line("Flooring", "100")];
        assert_eq!(cart.len(), 2);
        assert_eq!(total(&cart).unwrap(), 200);
    }

    #[test]
    fn test_total_tolerates_surrounding_whitespace() {
        let cart = vec![line("Lawn", " 25 ")];
        assert_eq!(total(&cart).unwrap(), 25);
    }

    #[test]
    fn test_total_malformed_cost() {
        let cart = vec![line("Flooring", "100"), line("Roofing", "fifty")];
        let err = total(&cart).unwrap_err();
        assert!(matches!(err, CartError::MalformedCost(ref c) if c == "fifty"));
    }

    #[test]
    fn test_total_overflow_detected() {
        let cart = vec![line("Flooring", &i64::MAX.to_string()), line("Roofing", "1")];
        assert!(matches!(total(&cart), Err(CartError::TotalOverflow)));
    }
}
