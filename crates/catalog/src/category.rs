use serde::{Deserialize, Serialize};

use musclemate_core::{CategoryId, DomainError, DomainResult};

/// A catalog category. Immutable once products reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-safe unique identifier (e.g. "protein-supplements").
    pub slug: String,
}

/// Validated payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let slug = slug.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::validation("category name must not be empty"));
        }
        validate_slug(&slug)?;

        Ok(Self { name, slug })
    }

    pub fn into_category(self) -> Category {
        Category {
            id: CategoryId::new(),
            name: self.name,
            slug: self.slug,
        }
    }
}

pub(crate) fn validate_slug(slug: &str) -> DomainResult<()> {
    if slug.is_empty() {
        return Err(DomainError::validation("slug must not be empty"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DomainError::validation(
            "slug must contain only lowercase letters, digits and hyphens",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_category() {
        let cat = NewCategory::new("Protein & Supplements", "protein-supplements").unwrap();
        assert_eq!(cat.name, "Protein & Supplements");
        assert_eq!(cat.slug, "protein-supplements");
    }

    #[test]
    fn rejects_empty_name() {
        let err = NewCategory::new("  ", "accessories").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_slug_with_uppercase_or_spaces() {
        assert!(NewCategory::new("Accessories", "Accessories").is_err());
        assert!(NewCategory::new("Accessories", "lifting straps").is_err());
    }
}
