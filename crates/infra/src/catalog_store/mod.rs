//! Catalog persistence (categories and products).

use async_trait::async_trait;

use musclemate_catalog::{Category, Product};
use musclemate_core::ProductId;

use crate::error::StoreError;

mod in_memory;
mod postgres;

pub use in_memory::InMemoryCatalogStore;
pub use postgres::PostgresCatalogStore;

/// Storage for the product catalog. The order flow only calls
/// `product_exists`; everything else serves the catalog endpoints.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn insert_category(&self, category: &Category) -> Result<(), StoreError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError>;

    async fn insert_product(&self, product: &Product) -> Result<(), StoreError>;

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    async fn product_exists(&self, id: ProductId) -> Result<bool, StoreError>;

    /// Active products only, the public storefront view.
    async fn list_active_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError>;
}
