use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use musclemate_core::{CategoryId, DomainError, DomainResult, ProductId};

use crate::category::validate_slug;

/// A catalog product.
///
/// Orders snapshot the price supplied with the request; later changes to
/// `price` never touch existing order lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    /// Optional image URL or storage path.
    pub image: Option<String>,
    pub is_active: bool,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: CategoryId,
}

impl NewProduct {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
        image: Option<String>,
        category_id: CategoryId,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let slug = slug.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        validate_slug(&slug)?;
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price must not be negative"));
        }
        if stock < 0 {
            return Err(DomainError::validation("stock must not be negative"));
        }

        Ok(Self {
            name,
            slug,
            description: description.into(),
            price,
            stock,
            image,
            category_id,
        })
    }

    pub fn into_product(self, now: DateTime<Utc>) -> Product {
        Product {
            id: ProductId::new(),
            name: self.name,
            slug: self.slug,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image: self.image,
            is_active: true,
            category_id: self.category_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromStr;

    fn test_category_id() -> CategoryId {
        CategoryId::new()
    }

    #[test]
    fn accepts_well_formed_product() {
        let new = NewProduct::new(
            "Whey Protein 1kg",
            "whey-protein-1kg",
            "High quality whey protein for muscle recovery.",
            Decimal::from_str("2499.00").unwrap(),
            50,
            None,
            test_category_id(),
        )
        .unwrap();

        let product = new.into_product(Utc::now());
        assert!(product.is_active);
        assert_eq!(product.stock, 50);
        assert_eq!(product.price, Decimal::from_str("2499.00").unwrap());
    }

    #[test]
    fn rejects_negative_price() {
        let err = NewProduct::new(
            "Lifting Straps",
            "lifting-straps",
            "",
            Decimal::from_str("-1.00").unwrap(),
            10,
            None,
            test_category_id(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_negative_stock() {
        let err = NewProduct::new(
            "Lifting Straps",
            "lifting-straps",
            "",
            Decimal::from_str("399.00").unwrap(),
            -1,
            None,
            test_category_id(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
