//! Postgres-backed catalog store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use musclemate_catalog::{Category, Product};
use musclemate_core::ProductId;

use super::CatalogStore;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn category_from_row(row: &PgRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: row.try_get::<Uuid, _>("id")?.into(),
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
    })
}

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get::<Uuid, _>("id")?.into(),
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        description: row.try_get("description")?,
        price: row.try_get::<Decimal, _>("price")?,
        stock: row.try_get("stock")?,
        image: row.try_get("image")?,
        is_active: row.try_get("is_active")?,
        category_id: row.try_get::<Uuid, _>("category_id")?.into(),
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

const PRODUCT_COLUMNS: &str =
    "id, name, slug, description, price, stock, image, is_active, category_id, created_at, updated_at";

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    #[instrument(skip(self, category), fields(slug = %category.slug))]
    async fn insert_category(&self, category: &Category) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO categories (id, name, slug) VALUES ($1, $2, $3)")
            .bind(category.id.as_uuid())
            .bind(&category.name)
            .bind(&category.slug)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, name, slug FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| category_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query("SELECT id, name, slug FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| category_from_row(&row).map_err(StoreError::from))
            .transpose()
    }

    #[instrument(skip(self, product), fields(slug = %product.slug))]
    async fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO products
                (id, name, slug, description, price, stock, image, is_active,
                 category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.image)
        .bind(product.is_active)
        .bind(product.category_id.as_uuid())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| product_from_row(&row).map_err(StoreError::from))
            .transpose()
    }

    async fn product_exists(&self, id: ProductId) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<bool, _>(0)?)
    }

    async fn list_active_products(&self) -> Result<Vec<Product>, StoreError> {
        let query =
            format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active ORDER BY name");
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| product_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1");
        let row = sqlx::query(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| product_from_row(&row).map_err(StoreError::from))
            .transpose()
    }
}
