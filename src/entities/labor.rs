//! Labor entity - The workshop labor-rate model.
//!
//! A single-row table. The hourly rate is derived from the target salary
//! and the working schedule; `core::labor::sync_hourly_rate` keeps it
//! consistent whenever the other three fields change.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Labor database model (single row)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "labor")]
pub struct Model {
    /// Row identifier (only one row exists)
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Derived hourly rate, kept in sync with the fields below
    pub hourly_rate: f64,
    /// Target monthly salary
    pub target_salary: f64,
    /// Working days per month
    pub days_per_month: f64,
    /// Working hours per day
    pub hours_per_day: f64,
}

/// No relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
