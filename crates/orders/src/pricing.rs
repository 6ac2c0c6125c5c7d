//! Order pricing and the repeat-customer discount policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use musclemate_core::round_money;

use crate::line::OrderLine;

/// Flat repeat-customer discount rate: 10% of the subtotal.
///
/// Applied whenever the customer has at least one prior order. No time
/// window, no tiering, no cap.
pub const REPEAT_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Result of pricing an order: subtotal, discount and final total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Price a set of validated order lines.
///
/// `subtotal = Σ unit_price · quantity` with exact decimal arithmetic.
/// Repeat customers get a flat 10% discount, rounded to the currency's
/// minor-unit precision; `total = subtotal − discount`.
pub fn price_order(lines: &[OrderLine], is_repeat_customer: bool) -> Pricing {
    let subtotal: Decimal = lines.iter().map(OrderLine::amount).sum();

    let discount = if is_repeat_customer {
        round_money(subtotal * REPEAT_DISCOUNT_RATE)
    } else {
        Decimal::ZERO
    };

    Pricing {
        subtotal,
        discount,
        total: subtotal - discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musclemate_core::ProductId;
    use proptest::prelude::*;
    use rust_decimal::prelude::FromStr;

    fn line(price: &str, quantity: u32) -> OrderLine {
        OrderLine::new(
            ProductId::new(),
            Decimal::from_str(price).unwrap(),
            quantity,
        )
        .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn discount_rate_is_ten_percent() {
        assert_eq!(REPEAT_DISCOUNT_RATE, dec("0.10"));
    }

    #[test]
    fn first_order_gets_no_discount() {
        // 2 x 100.00 + 1 x 50.00, first order.
        let lines = vec![line("100.00", 2), line("50.00", 1)];
        let pricing = price_order(&lines, false);

        assert_eq!(pricing.subtotal, dec("250.00"));
        assert_eq!(pricing.discount, dec("0"));
        assert_eq!(pricing.total, dec("250.00"));
    }

    #[test]
    fn repeat_order_gets_flat_ten_percent() {
        // Same items, second order for the same customer.
        let lines = vec![line("100.00", 2), line("50.00", 1)];
        let pricing = price_order(&lines, true);

        assert_eq!(pricing.subtotal, dec("250.00"));
        assert_eq!(pricing.discount, dec("25.00"));
        assert_eq!(pricing.total, dec("225.00"));
    }

    #[test]
    fn discount_is_rounded_to_minor_units() {
        // 10% of 0.25 is 0.025; rounds half-up to 0.03.
        let lines = vec![line("0.25", 1)];
        let pricing = price_order(&lines, true);

        assert_eq!(pricing.discount, dec("0.03"));
        assert_eq!(pricing.total, dec("0.22"));
    }

    #[test]
    fn zero_priced_lines_are_allowed() {
        let lines = vec![line("0.00", 3)];
        let pricing = price_order(&lines, true);

        assert_eq!(pricing.subtotal, dec("0.00"));
        assert_eq!(pricing.discount, dec("0.00"));
        assert_eq!(pricing.total, dec("0.00"));
    }

    proptest! {
        /// For all valid line sets, total == subtotal - discount exactly,
        /// and the discount is 10% (rounded) iff the customer is a repeat.
        #[test]
        fn total_is_subtotal_minus_discount(
            cents in proptest::collection::vec((0u64..1_000_000, 1u32..100), 1..20),
            is_repeat in any::<bool>(),
        ) {
            let lines: Vec<OrderLine> = cents
                .into_iter()
                .map(|(price_cents, quantity)| {
                    OrderLine::new(
                        ProductId::new(),
                        Decimal::new(price_cents as i64, 2),
                        quantity,
                    )
                    .unwrap()
                })
                .collect();

            let pricing = price_order(&lines, is_repeat);

            prop_assert_eq!(pricing.total, pricing.subtotal - pricing.discount);
            if is_repeat {
                prop_assert_eq!(
                    pricing.discount,
                    round_money(pricing.subtotal * REPEAT_DISCOUNT_RATE)
                );
            } else {
                prop_assert_eq!(pricing.discount, Decimal::ZERO);
            }
            prop_assert!(pricing.total >= Decimal::ZERO);
        }
    }
}
