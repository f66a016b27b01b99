//! Product entity - Represents one sellable item type in the catalog.
//!
//! Each product carries the costs the pricing engine needs: the blank
//! (unprinted) item cost, packaging, production time, the main material
//! category, and whether the product participates in fixed-overhead
//! allocation. Products are soft-deleted so old quotes stay explainable.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "White Ceramic Mug")
    pub name: String,
    /// Free-form production category (e.g., "Sublimation", "Photography")
    pub product_type: String,
    /// Main material tag, one of the closed set in [`crate::core::pricing::Material`]
    pub material: String,
    /// Cost of the blank item before any customization work
    pub blank_cost: f64,
    /// Packaging cost per unit
    pub packaging_cost: f64,
    /// Production time per unit, in minutes
    pub production_minutes: f64,
    /// Whether this product absorbs a share of monthly fixed overhead
    pub allocate_overhead: bool,
    /// Soft delete flag - if true, product is hidden but data is preserved
    pub is_deleted: bool,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Products have no foreign-key relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
