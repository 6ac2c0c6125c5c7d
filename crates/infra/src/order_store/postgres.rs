//! Postgres-backed order store.
//!
//! The insert path wraps the order row and all item rows in a single
//! transaction: any failure rolls everything back, so no partial order
//! can persist.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use musclemate_core::{DomainError, UserId};
use musclemate_orders::{Order, OrderItem};

use super::OrderStore;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn has_orders(&self, user_id: UserId) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM orders WHERE user_id = $1)")
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get::<bool, _>(0)?)
    }

    #[instrument(skip(self, order), fields(order_id = %order.id, items = order.items.len()))]
    async fn insert(&self, order: &Order) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, user_id, total_amount, discount_amount, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.user_id.as_uuid())
        .bind(order.total_amount)
        .bind(order.discount_amount)
        .bind(order.created_at)
        .execute(&mut *tx)
        .await?;

        for item in &order.items {
            // OrderLine::new bounds quantity to MAX_QUANTITY, so this
            // conversion only fails for aggregates built by hand.
            let quantity = i32::try_from(item.quantity)
                .map_err(|_| DomainError::validation("quantity too large"))?;
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, price, quantity)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(item.id.as_uuid())
            .bind(item.order_id.as_uuid())
            .bind(item.product_id.as_uuid())
            .bind(item.price)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let order_rows = sqlx::query(
            r#"
            SELECT id, user_id, total_amount, discount_amount, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(order_rows.len());
        for row in order_rows {
            orders.push(Order {
                id: row.try_get::<Uuid, _>("id")?.into(),
                user_id: row.try_get::<Uuid, _>("user_id")?.into(),
                total_amount: row.try_get::<Decimal, _>("total_amount")?,
                discount_amount: row.try_get::<Decimal, _>("discount_amount")?,
                created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
                items: Vec::new(),
            });
        }

        if orders.is_empty() {
            return Ok(orders);
        }

        let order_ids: Vec<Uuid> = orders.iter().map(|o| *o.id.as_uuid()).collect();
        let item_rows = sqlx::query(
            r#"
            SELECT id, order_id, product_id, price, quantity
            FROM order_items
            WHERE order_id = ANY($1)
            "#,
        )
        .bind(&order_ids)
        .fetch_all(&self.pool)
        .await?;

        for row in item_rows {
            // The CHECK constraint keeps stored quantities >= 1.
            let quantity = u32::try_from(row.try_get::<i32, _>("quantity")?)
                .map_err(|_| DomainError::validation("stored quantity out of range"))?;
            let item = OrderItem {
                id: row.try_get::<Uuid, _>("id")?.into(),
                order_id: row.try_get::<Uuid, _>("order_id")?.into(),
                product_id: row.try_get::<Uuid, _>("product_id")?.into(),
                price: row.try_get::<Decimal, _>("price")?,
                quantity,
            };
            if let Some(order) = orders.iter_mut().find(|o| o.id == item.order_id) {
                order.items.push(item);
            }
        }

        Ok(orders)
    }
}
