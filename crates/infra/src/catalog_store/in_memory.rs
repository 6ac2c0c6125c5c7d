use std::sync::RwLock;

use async_trait::async_trait;

use musclemate_catalog::{Category, Product};
use musclemate_core::{DomainError, ProductId};

use super::CatalogStore;
use crate::error::StoreError;

/// In-memory catalog store for dev/test.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn insert_category(&self, category: &Category) -> Result<(), StoreError> {
        let mut categories = self.categories.write().expect("catalog lock poisoned");
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::conflict(format!(
                "category slug '{}' already exists",
                category.slug
            ))
            .into());
        }
        categories.push(category.clone());
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self
            .categories
            .read()
            .expect("catalog lock poisoned")
            .clone())
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError> {
        let categories = self.categories.read().expect("catalog lock poisoned");
        Ok(categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        let known_category = self
            .categories
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .any(|c| c.id == product.category_id);
        if !known_category {
            return Err(DomainError::invalid_reference(format!(
                "unknown category {}",
                product.category_id
            ))
            .into());
        }

        let mut products = self.products.write().expect("catalog lock poisoned");
        if products.iter().any(|p| p.slug == product.slug) {
            return Err(DomainError::conflict(format!(
                "product slug '{}' already exists",
                product.slug
            ))
            .into());
        }
        products.push(product.clone());
        Ok(())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().expect("catalog lock poisoned");
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn product_exists(&self, id: ProductId) -> Result<bool, StoreError> {
        let products = self.products.read().expect("catalog lock poisoned");
        Ok(products.iter().any(|p| p.id == id))
    }

    async fn list_active_products(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().expect("catalog lock poisoned");
        Ok(products.iter().filter(|p| p.is_active).cloned().collect())
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().expect("catalog lock poisoned");
        Ok(products.iter().find(|p| p.slug == slug).cloned())
    }
}
