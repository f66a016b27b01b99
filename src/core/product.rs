//! Product business logic - Handles all catalog operations.
//!
//! This module provides functions for creating, retrieving, updating, and
//! soft-deleting the sellable items the pricing engine quotes. All functions
//! validate their inputs (non-empty name, finite non-negative costs, a
//! recognized material tag) and return Result types for proper error
//! handling throughout the system.

use crate::{
    core::pricing::Material,
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Validated fields for creating or updating a product.
#[derive(Debug, Clone)]
pub struct ProductFields {
    /// Display name, must be non-empty
    pub name: String,
    /// Free-form production category
    pub product_type: String,
    /// Material tag, must be one of [`Material::TAGS`]
    pub material: String,
    /// Blank item cost, finite and non-negative
    pub blank_cost: f64,
    /// Packaging cost, finite and non-negative
    pub packaging_cost: f64,
    /// Production minutes, finite and non-negative
    pub production_minutes: f64,
    /// Whether the product absorbs a share of fixed overhead
    pub allocate_overhead: bool,
}

fn validate_fields(fields: &ProductFields) -> Result<()> {
    if fields.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    for amount in [
        fields.blank_cost,
        fields.packaging_cost,
        fields.production_minutes,
    ] {
        if amount < 0.0 || !amount.is_finite() {
            return Err(Error::InvalidAmount { amount });
        }
    }

    // The engine tolerates unknown tags (they price as "none"), but the
    // catalog rejects them so stored rosters stay clean.
    if !Material::TAGS.contains(&fields.material.as_str()) {
        return Err(Error::UnknownMaterial {
            tag: fields.material.clone(),
            expected: Material::TAGS.join(", "),
        });
    }

    Ok(())
}

/// Retrieves all active (non-deleted) products, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_active_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::IsDeleted.eq(false))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific product by its name, returning None if not found or deleted.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .filter(product::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product after validating every field.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - A cost or the production time is negative or not finite
/// - The material tag is outside the closed set
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    fields: ProductFields,
) -> Result<product::Model> {
    validate_fields(&fields)?;

    let now = chrono::Utc::now().naive_utc();

    let product = product::ActiveModel {
        name: Set(fields.name.trim().to_string()),
        product_type: Set(fields.product_type.trim().to_string()),
        material: Set(fields.material),
        blank_cost: Set(fields.blank_cost),
        packaging_cost: Set(fields.packaging_cost),
        production_minutes: Set(fields.production_minutes),
        allocate_overhead: Set(fields.allocate_overhead),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product in place with freshly validated fields.
///
/// # Errors
/// Returns an error if:
/// - Validation fails (see [`create_product`])
/// - The product does not exist or is already deleted
/// - The database update operation fails
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    fields: ProductFields,
) -> Result<product::Model> {
    validate_fields(&fields)?;

    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: product_id.to_string(),
        })?
        .into();

    if *product.is_deleted.as_ref() {
        return Err(Error::ProductNotFound {
            name: product_id.to_string(),
        });
    }

    product.name = Set(fields.name.trim().to_string());
    product.product_type = Set(fields.product_type.trim().to_string());
    product.material = Set(fields.material);
    product.blank_cost = Set(fields.blank_cost);
    product.packaging_cost = Set(fields.packaging_cost);
    product.production_minutes = Set(fields.production_minutes);
    product.allocate_overhead = Set(fields.allocate_overhead);
    product.updated_at = Set(chrono::Utc::now().naive_utc());

    product.update(db).await.map_err(Into::into)
}

/// Soft deletes a product by marking it as deleted, preserving its data.
///
/// # Errors
/// Returns an error if:
/// - The product does not exist or is already deleted
/// - The database update operation fails
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<product::Model> {
    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: product_id.to_string(),
        })?
        .into();

    if *product.is_deleted.as_ref() {
        return Err(Error::ProductNotFound {
            name: product_id.to_string(),
        });
    }

    product.is_deleted = Set(true);
    product.updated_at = Set(chrono::Utc::now().naive_utc());

    product.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{mug_fields, setup_test_db};

    #[tokio::test]
    async fn test_create_product_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Empty name
        let result = create_product(
            &db,
            ProductFields {
                name: String::new(),
                ..mug_fields()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Whitespace-only name
        let result = create_product(
            &db,
            ProductFields {
                name: "   ".to_string(),
                ..mug_fields()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Negative blank cost
        let result = create_product(
            &db,
            ProductFields {
                blank_cost: -10.0,
                ..mug_fields()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -10.0 }
        ));

        // NaN packaging cost
        let result = create_product(
            &db,
            ProductFields {
                packaging_cost: f64::NAN,
                ..mug_fields()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: _ }
        ));

        // Infinite production time
        let result = create_product(
            &db,
            ProductFields {
                production_minutes: f64::INFINITY,
                ..mug_fields()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: _ }
        ));

        // Material tag outside the closed set
        let result = create_product(
            &db,
            ProductFields {
                material: "glitter".to_string(),
                ..mug_fields()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::UnknownMaterial { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let product = create_product(&db, mug_fields()).await?;

        assert_eq!(product.name, "White Ceramic Mug");
        assert_eq!(product.material, "sublimation");
        assert_eq!(product.blank_cost, 12.50);
        assert_eq!(product.packaging_cost, 1.50);
        assert_eq!(product.production_minutes, 15.0);
        assert!(product.allocate_overhead);
        assert!(!product.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_by_name_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_product(&db, mug_fields()).await?;

        let found = get_product_by_name(&db, "White Ceramic Mug").await?;
        assert_eq!(found.unwrap().id, created.id);

        let not_found = get_product_by_name(&db, "Non-existent").await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_active_products_ordered() -> Result<()> {
        let db = setup_test_db().await?;

        create_product(
            &db,
            ProductFields {
                name: "Photo Print 10x15".to_string(),
                material: "photo".to_string(),
                ..mug_fields()
            },
        )
        .await?;
        create_product(&db, mug_fields()).await?;

        let products = get_all_active_products(&db).await?;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Photo Print 10x15");
        assert_eq!(products[1].name, "White Ceramic Mug");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let product = create_product(&db, mug_fields()).await?;

        let updated = update_product(
            &db,
            product.id,
            ProductFields {
                blank_cost: 14.0,
                allocate_overhead: false,
                ..mug_fields()
            },
        )
        .await?;

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.blank_cost, 14.0);
        assert!(!updated.allocate_overhead);

        // Verify the update persisted
        let retrieved = get_product_by_id(&db, product.id).await?.unwrap();
        assert_eq!(retrieved.blank_cost, 14.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_product(&db, 999, mug_fields()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ProductNotFound { name: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let product = create_product(&db, mug_fields()).await?;
        let deleted = delete_product(&db, product.id).await?;

        assert!(deleted.is_deleted);
        assert_eq!(deleted.id, product.id);

        // No longer listed, and a second delete reports not-found
        assert!(get_all_active_products(&db).await?.is_empty());
        let result = delete_product(&db, product.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ProductNotFound { name: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_product_hidden_from_name_lookup() -> Result<()> {
        let db = setup_test_db().await?;

        let product = create_product(&db, mug_fields()).await?;
        delete_product(&db, product.id).await?;

        assert!(
            get_product_by_name(&db, "White Ceramic Mug")
                .await?
                .is_none()
        );

        Ok(())
    }
}
