//! Cart-view discount engine.
//!
//! The discount is cosmetic: it is applied once per cart render for
//! display and is never persisted or forwarded to checkout, which always
//! submits the raw cart contents.

/// A pure total-to-discounted-total mapping.
///
/// Implementations must be side-effect free and deterministic.
pub trait DiscountEngine: Send + Sync {
    /// Apply the discount to a cart total, returning the amount to show.
    fn apply_discount(&self, total: i64) -> i64;
}

/// Threshold-based percentage discount.
///
/// - 10% off totals of 200 and above
/// - 5% off totals of 100 and above
/// - no discount below 100
///
/// Discounts round in the customer's favor (integer floor of the
/// deduction).
#[derive(Debug, Default, Clone, Copy)]
pub struct TieredDiscount;

impl DiscountEngine for TieredDiscount {
    fn apply_discount(&self, total: i64) -> i64 {
        if total >= 200 {
            total - total / 10
        } else if total >= 100 {
            total - total / 20
        } else {
            total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discount_below_threshold() {
        let engine = TieredDiscount;
        assert_eq!(engine.apply_discount(0), 0);
        assert_eq!(engine.apply_discount(99), 99);
    }

    #[test]
    fn test_five_percent_tier() {
        let engine = TieredDiscount;
        assert_eq!(engine.apply_discount(100), 95);
        assert_eq!(engine.apply_discount(150), 143);
        assert_eq!(engine.apply_discount(199), 190);
    }

    #[test]
    fn test_ten_percent_tier() {
        let engine = TieredDiscount;
        assert_eq!(engine.apply_discount(200), 180);
        assert_eq!(engine.apply_discount(1000), 900);
    }

    #[test]
    fn test_deterministic() {
        let engine = TieredDiscount;
        assert_eq!(engine.apply_discount(150), engine.apply_discount(150));
    }

    #[test]
    fn test_never_negative_for_non_negative_totals() {
        let engine = TieredDiscount;
        for total in [0, 1, 99, 100, 150, 200, 10_000] {
            let discounted = engine.apply_discount(total);
            assert!(discounted >= 0);
            assert!(discounted <= total);
        }
    }
}
