//! Order persistence.

use async_trait::async_trait;

use musclemate_core::UserId;
use musclemate_orders::Order;

use crate::error::StoreError;

mod in_memory;
mod postgres;

pub use in_memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;

/// Storage for placed orders.
///
/// `insert` must be atomic: the order row and all of its item rows
/// commit together or not at all.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// True iff the user has at least one prior order (repeat-customer
    /// check; plain existence, no time window).
    async fn has_orders(&self, user_id: UserId) -> Result<bool, StoreError>;

    /// Persist an assembled order with its items as one atomic unit.
    async fn insert(&self, order: &Order) -> Result<(), StoreError>;

    /// All orders of a user with their items, newest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError>;
}
