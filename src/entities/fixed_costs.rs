//! Fixed-costs entity - The monthly overhead sheet.
//!
//! A single-row table: eight named overhead fields plus the monthly
//! production capacity used to allocate them per unit. Seeded from
//! `config.toml` on first run and edited in place afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed-costs database model (single row)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fixed_costs")]
pub struct Model {
    /// Row identifier (only one row exists)
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Monthly rent
    pub rent: f64,
    /// Monthly water bill
    pub water: f64,
    /// Monthly electricity bill
    pub electricity: f64,
    /// Monthly internet bill
    pub internet: f64,
    /// Monthly accounting fees
    pub accounting: f64,
    /// Monthly marketing spend
    pub marketing: f64,
    /// Monthly taxes
    pub taxes: f64,
    /// Other monthly overhead
    pub other: f64,
    /// Monthly production capacity, in units
    pub monthly_capacity: f64,
}

/// No relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
