//! Variable-costs entity - The per-unit consumable price sheet.
//!
//! A single-row table holding one price per material category plus ink,
//! energy, the card-fee percentage, and the waste allowance percentage.
//! Printer energy is tracked here but is not part of the variable-cost
//! sum (see `core::pricing`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Variable-costs database model (single row)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "variable_costs")]
pub struct Model {
    /// Row identifier (only one row exists)
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Sublimation paper, per sheet
    pub sublimation_paper: f64,
    /// Photo paper, per sheet
    pub photo_paper: f64,
    /// DTF film, per sheet
    pub dtf_film: f64,
    /// Xerox/copy cost, per page
    pub xerox_cost: f64,
    /// Adhesive vinyl, per sheet
    pub adhesive_vinyl: f64,
    /// Power film, per sheet
    pub power_film: f64,
    /// Ink cost per unit
    pub ink: f64,
    /// Heat-press energy cost per unit
    pub press_energy: f64,
    /// Printer energy cost per unit (tracked, not summed)
    pub printer_energy: f64,
    /// Payment-processor fee, percent of the final sale price
    pub card_fee_percent: f64,
    /// Waste/scrap allowance, percent over material-related cost
    pub waste_percent: f64,
}

/// No relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
