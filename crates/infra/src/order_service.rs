//! Order placement and retrieval over the storage traits.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use musclemate_core::{DomainError, UserId};
use musclemate_orders::{price_order, Order, PlaceOrder};

use crate::catalog_store::CatalogStore;
use crate::error::StoreError;
use crate::order_store::OrderStore;

/// Coordinates a place-order call: reference validation, the
/// repeat-customer check, pricing, and the atomic write.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    catalog: Arc<dyn CatalogStore>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { orders, catalog }
    }

    /// Place an order for `user_id`.
    ///
    /// Every referenced product must exist in the catalog. The
    /// repeat-customer discount applies whenever the user has any prior
    /// order, judged before this one is written, so a user's first and
    /// second concurrent orders may both price without discount.
    #[instrument(skip(self, command), fields(user_id = %user_id, lines = command.lines().len()))]
    pub async fn place_order(
        &self,
        user_id: UserId,
        command: PlaceOrder,
    ) -> Result<Order, StoreError> {
        for line in command.lines() {
            if !self.catalog.product_exists(line.product_id).await? {
                return Err(DomainError::invalid_reference(format!(
                    "unknown product {}",
                    line.product_id
                ))
                .into());
            }
        }

        let is_repeat = self.orders.has_orders(user_id).await?;
        let lines = command.into_lines();
        let pricing = price_order(&lines, is_repeat);
        let order = Order::assemble(user_id, lines, pricing, Utc::now());

        self.orders.insert(&order).await?;
        info!(
            order_id = %order.id,
            total = %order.total_amount,
            discount = %order.discount_amount,
            "order placed"
        );
        Ok(order)
    }

    /// All orders of a user, newest first.
    pub async fn my_orders(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        self.orders.list_for_user(user_id).await
    }
}
