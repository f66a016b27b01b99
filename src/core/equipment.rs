//! Equipment business logic - Manages the depreciable-asset roster.
//!
//! Assets feed the engine's per-unit depreciation term. A zero useful life
//! or zero monthly usage is accepted here (the engine treats it as zero
//! depreciation); negative or non-finite values are not.

use crate::{
    entities::{Equipment, equipment},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

fn validate(
    name: &str,
    purchase_price: f64,
    useful_life_months: f64,
    monthly_usage: f64,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Equipment name cannot be empty".to_string(),
        });
    }

    for amount in [purchase_price, useful_life_months, monthly_usage] {
        if amount < 0.0 || !amount.is_finite() {
            return Err(Error::InvalidAmount { amount });
        }
    }

    Ok(())
}

/// Retrieves all active (non-deleted) equipment, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_active_equipment(db: &DatabaseConnection) -> Result<Vec<equipment::Model>> {
    Equipment::find()
        .filter(equipment::Column::IsDeleted.eq(false))
        .order_by_asc(equipment::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Registers a new depreciable asset.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - Price, life, or usage is negative or not finite
/// - The database insert operation fails
pub async fn create_equipment(
    db: &DatabaseConnection,
    name: String,
    purchase_price: f64,
    useful_life_months: f64,
    monthly_usage: f64,
) -> Result<equipment::Model> {
    validate(&name, purchase_price, useful_life_months, monthly_usage)?;

    let now = chrono::Utc::now().naive_utc();

    let item = equipment::ActiveModel {
        name: Set(name.trim().to_string()),
        purchase_price: Set(purchase_price),
        useful_life_months: Set(useful_life_months),
        monthly_usage: Set(monthly_usage),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    item.insert(db).await.map_err(Into::into)
}

/// Soft deletes an asset by id, removing it from future quotes.
///
/// # Errors
/// Returns an error if:
/// - The asset does not exist or is already deleted
/// - The database update operation fails
pub async fn delete_equipment(
    db: &DatabaseConnection,
    equipment_id: i64,
) -> Result<equipment::Model> {
    let mut item: equipment::ActiveModel = Equipment::find_by_id(equipment_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::EquipmentNotFound {
            name: equipment_id.to_string(),
        })?
        .into();

    if *item.is_deleted.as_ref() {
        return Err(Error::EquipmentNotFound {
            name: equipment_id.to_string(),
        });
    }

    item.is_deleted = Set(true);
    item.updated_at = Set(chrono::Utc::now().naive_utc());

    item.update(db).await.map_err(Into::into)
}
