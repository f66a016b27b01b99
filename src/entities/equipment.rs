//! Equipment entity - Represents a depreciable workshop asset.
//!
//! Depreciation is spread linearly over the useful life and attributed to
//! each produced unit via the monthly usage volume. A zero life or zero
//! usage contributes zero depreciation, never a division error.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Equipment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    /// Unique identifier for the equipment item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the asset (e.g., "38x38 Flat Heat Press")
    pub name: String,
    /// Purchase price
    pub purchase_price: f64,
    /// Useful life in months
    pub useful_life_months: f64,
    /// Units produced with this asset per month
    pub monthly_usage: f64,
    /// Soft delete flag - if true, the asset is hidden but data is preserved
    pub is_deleted: bool,
    /// When the record was created
    pub created_at: DateTime,
    /// When the record was last modified
    pub updated_at: DateTime,
}

/// Equipment has no foreign-key relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
