use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use musclemate_core::{DomainError, DomainResult, ProductId};

/// Largest accepted line quantity; matches the range of the INTEGER
/// column the quantity is stored in.
pub const MAX_QUANTITY: u32 = i32::MAX as u32;

/// A validated order line: product, unit price at time of order, quantity.
///
/// The unit price is caller-supplied and trusted verbatim; it is a
/// snapshot independent of any later catalog price change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: ProductId, unit_price: Decimal, quantity: u32) -> DomainResult<Self> {
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if quantity > MAX_QUANTITY {
            return Err(DomainError::validation("quantity too large"));
        }
        if unit_price < Decimal::ZERO {
            return Err(DomainError::validation("price must not be negative"));
        }

        Ok(Self {
            product_id,
            unit_price,
            quantity,
        })
    }

    /// Line total: unit price times quantity, exact.
    pub fn amount(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Validated place-order command.
///
/// Built at the HTTP boundary from the raw request body; anything past
/// this point works with typed, validated data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    lines: Vec<OrderLine>,
}

impl PlaceOrder {
    pub fn new(lines: Vec<OrderLine>) -> DomainResult<Self> {
        if lines.is_empty() {
            return Err(DomainError::validation("No items"));
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<OrderLine> {
        self.lines
    }
}
