//! Discounted price computation
//!
//! All monetary values are fixed-point [`Decimal`] with 2 decimal places.
//! Rounding is half-up (`MidpointAwayFromZero`) everywhere: the same rule
//! applies on the order-creation path and on catalog display, so a price a
//! customer saw is the price they are charged per unit.

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary scale: 2 decimal places
pub const PRICE_SCALE: u32 = 2;

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Unit price after discount
///
/// `price * (1 - discount/100)` when discount > 0, the plain price
/// otherwise. Result is rounded to 2 decimal places half-up.
pub fn discounted_unit_price(price: Decimal, discount: i16) -> Decimal {
    if discount > 0 {
        let factor = Decimal::ONE - Decimal::from(discount) / Decimal::from(100);
        round_money(price * factor)
    } else {
        round_money(price)
    }
}

/// Total price for an order line: rounded unit price times quantity,
/// rounded again to 2 decimal places
pub fn order_total(price: Decimal, discount: i16, quantity: i32) -> Decimal {
    round_money(discounted_unit_price(price, discount) * Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_discounted_unit_price() {
        // price=100.00, discount=20 -> 80.00
        assert_eq!(discounted_unit_price(dec("100.00"), 20), dec("80.00"));
        // no discount passes through
        assert_eq!(discounted_unit_price(dec("50.00"), 0), dec("50.00"));
    }

    #[test]
    fn test_order_total_with_discount() {
        // price=100.00, discount=20, qty=3 -> unit 80.00, total 240.00
        assert_eq!(order_total(dec("100.00"), 20, 3), dec("240.00"));
    }

    #[test]
    fn test_order_total_without_discount() {
        // price=50.00, discount=0, qty=2 -> 100.00
        assert_eq!(order_total(dec("50.00"), 0, 2), dec("100.00"));
    }

    #[test]
    fn test_half_up_rounding_at_midpoint() {
        // 0.10 * 0.75 = 0.075 -> half-up to 0.08
        assert_eq!(discounted_unit_price(dec("0.10"), 25), dec("0.08"));
        // 10.01 * 0.75 = 7.5075 -> 7.51
        assert_eq!(discounted_unit_price(dec("10.01"), 25), dec("7.51"));
    }

    #[test]
    fn test_total_multiplies_rounded_unit_price() {
        // Unit price rounds first (0.075 -> 0.08), then scales by quantity:
        // 3 * 0.08 = 0.24, not round(3 * 0.075) = 0.23
        assert_eq!(order_total(dec("0.10"), 25, 3), dec("0.24"));
    }

    #[test]
    fn test_full_discount() {
        assert_eq!(order_total(dec("99.99"), 100, 4), dec("0.00"));
    }
}
