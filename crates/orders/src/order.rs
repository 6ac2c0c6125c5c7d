use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use musclemate_core::{OrderId, OrderItemId, ProductId, UserId};

use crate::line::OrderLine;
use crate::pricing::Pricing;

/// A persisted order line.
///
/// `price` is the unit price at the time the order was placed; it never
/// changes afterwards, regardless of catalog updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub price: Decimal,
    pub quantity: u32,
}

/// A placed order with its items.
///
/// Created exactly once per place-order call and never mutated;
/// `total_amount == Σ(price · quantity) − discount_amount` holds by
/// construction and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub discount_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Assemble a new order aggregate from priced lines.
    ///
    /// Persistence of the returned aggregate must be atomic: the order
    /// row and all item rows commit together or not at all.
    pub fn assemble(
        user_id: UserId,
        lines: Vec<OrderLine>,
        pricing: Pricing,
        created_at: DateTime<Utc>,
    ) -> Self {
        let id = OrderId::new();
        let items = lines
            .into_iter()
            .map(|line| OrderItem {
                id: OrderItemId::new(),
                order_id: id,
                product_id: line.product_id,
                price: line.unit_price,
                quantity: line.quantity,
            })
            .collect();

        Self {
            id,
            user_id,
            total_amount: pricing.total,
            discount_amount: pricing.discount,
            created_at,
            items,
        }
    }
}
