//! Money helpers.
//!
//! All prices and totals flow through [`rust_decimal::Decimal`]: exact
//! decimal arithmetic, no floating-point drift. Amounts are stored and
//! rendered at the currency's minor-unit precision (2 dp).

pub use rust_decimal::Decimal;

/// Number of minor-unit decimal places for the store currency.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to the currency's minor-unit precision.
///
/// Uses half-up rounding (the conventional commercial rounding mode).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        MONEY_SCALE,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}
