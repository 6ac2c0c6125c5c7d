//! Sample catalog data for dev and test runs.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use musclemate_catalog::{Category, NewCategory, NewProduct};

use crate::catalog_store::CatalogStore;
use crate::error::StoreError;

/// Seed the sample fitness catalog. Idempotent: categories and products
/// that already exist (by slug) are left untouched.
pub async fn seed_catalog(catalog: &dyn CatalogStore) -> Result<(), StoreError> {
    let supplements = ensure_category(catalog, "Protein & Supplements", "protein-supplements").await?;
    let accessories = ensure_category(catalog, "Accessories", "accessories").await?;

    let products = [
        (
            "Whey Protein 1kg",
            "whey-protein-1kg",
            "High quality whey protein for muscle recovery.",
            Decimal::new(249_900, 2),
            50,
            supplements.id,
        ),
        (
            "Lifting Straps",
            "lifting-straps",
            "Padded straps for heavy pulls and deadlifts.",
            Decimal::new(39_900, 2),
            80,
            accessories.id,
        ),
    ];

    for (name, slug, description, price, stock, category_id) in products {
        if catalog.find_product_by_slug(slug).await?.is_some() {
            continue;
        }
        let product = NewProduct::new(name, slug, description, price, stock, None, category_id)?
            .into_product(Utc::now());
        catalog.insert_product(&product).await?;
    }

    info!("seeded sample catalog");
    Ok(())
}

async fn ensure_category(
    catalog: &dyn CatalogStore,
    name: &str,
    slug: &str,
) -> Result<Category, StoreError> {
    if let Some(existing) = catalog.find_category_by_slug(slug).await? {
        return Ok(existing);
    }
    let category = NewCategory::new(name, slug)?.into_category();
    catalog.insert_category(&category).await?;
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_store::InMemoryCatalogStore;

    #[tokio::test]
    async fn seeding_twice_is_a_no_op() {
        let catalog = InMemoryCatalogStore::new();
        seed_catalog(&catalog).await.unwrap();
        seed_catalog(&catalog).await.unwrap();

        assert_eq!(catalog.list_categories().await.unwrap().len(), 2);
        assert_eq!(catalog.list_active_products().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn seeds_the_sample_products() {
        let catalog = InMemoryCatalogStore::new();
        seed_catalog(&catalog).await.unwrap();

        let whey = catalog
            .find_product_by_slug("whey-protein-1kg")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(whey.price, Decimal::new(249_900, 2));
        assert_eq!(whey.stock, 50);
    }
}
