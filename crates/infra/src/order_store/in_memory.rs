use std::sync::RwLock;

use async_trait::async_trait;

use musclemate_core::UserId;
use musclemate_orders::Order;

use super::OrderStore;
use crate::error::StoreError;

/// In-memory order store for dev/test.
///
/// A poisoned lock only occurs after a panic in another accessor; tests
/// treat that as unreachable.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn has_orders(&self, user_id: UserId) -> Result<bool, StoreError> {
        let orders = self.inner.read().expect("order store lock poisoned");
        Ok(orders.iter().any(|order| order.user_id == user_id))
    }

    async fn insert(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.inner.write().expect("order store lock poisoned");
        orders.push(order.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let orders = self.inner.read().expect("order store lock poisoned");
        let mut mine: Vec<Order> = orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect();
        // Newest first; id (UUIDv7, time-ordered) breaks created_at ties.
        mine.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_uuid().cmp(a.id.as_uuid()))
        });
        Ok(mine)
    }
}
