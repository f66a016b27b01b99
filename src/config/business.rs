//! Business seed configuration loading from config.toml
//!
//! This module provides functionality to load the workshop's initial cost
//! sheets, equipment roster, and product catalog from a TOML configuration
//! file. The records defined in config.toml are used to seed the database on
//! first run; after that the database is authoritative and config.toml is
//! ignored for tables that already have rows.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct BusinessConfig {
    /// Monthly overhead sheet seed
    pub fixed_costs: FixedCostsSeed,
    /// Consumable price sheet seed
    pub variable_costs: VariableCostsSeed,
    /// Labor model seed (hourly rate is derived, not configured)
    pub labor: LaborSeed,
    /// Initial equipment roster
    #[serde(default)]
    pub equipment: Vec<EquipmentSeed>,
    /// Initial product catalog
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// Seed values for the fixed-cost sheet
#[derive(Debug, Deserialize, Clone)]
pub struct FixedCostsSeed {
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
    /// Monthly production capacity in units
    pub monthly_capacity: f64,
}

/// Seed values for the variable-cost sheet
#[derive(Debug, Deserialize, Clone)]
pub struct VariableCostsSeed {
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
    /// Printer energy cost per unit
    pub printer_energy: f64,
    /// Card fee percentage
    pub card_fee_percent: f64,
    /// Waste allowance percentage
    pub waste_percent: f64,
}

/// Seed values for the labor model
#[derive(Debug, Deserialize, Clone)]
pub struct LaborSeed {
    /// Target monthly salary
    pub target_salary: f64,
    /// Working days per month
    pub days_per_month: f64,
    /// Working hours per day
    pub hours_per_day: f64,
}

/// Seed values for one equipment item
#[derive(Debug, Deserialize, Clone)]
pub struct EquipmentSeed {
    /// Asset name
    pub name: String,
    /// Purchase price
    pub purchase_price: f64,
    /// Useful life in months
    pub useful_life_months: f64,
    /// Units produced with this asset per month
    pub monthly_usage: f64,
}

/// Seed values for one catalog product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product name
    pub name: String,
    /// Free-form production category
    #[serde(default)]
    pub product_type: String,
    /// Material tag
    pub material: String,
    /// Blank item cost
    pub blank_cost: f64,
    /// Packaging cost
    pub packaging_cost: f64,
    /// Production minutes
    pub production_minutes: f64,
    /// Whether the product absorbs fixed overhead
    #[serde(default = "default_true")]
    pub allocate_overhead: bool,
}

const fn default_true() -> bool {
    true
}

/// Loads the business configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BusinessConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the business configuration from the default location (./config.toml)
///
/// # Errors
/// Same as [`load_config`].
pub fn load_default_config() -> Result<BusinessConfig> {
    load_config("config.toml")
}
