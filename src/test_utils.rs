//! Shared test utilities for `pricecraft`.
//!
//! This module provides common helper functions for setting up test databases
//! and building sample records. The sample values reproduce the worked
//! scenario used throughout the engine tests: a sublimation mug priced
//! against a 2280/month overhead sheet with 200 units of capacity.

use crate::{
    config::business::{
        BusinessConfig, EquipmentSeed, FixedCostsSeed, LaborSeed, ProductSeed, VariableCostsSeed,
    },
    core::{product::ProductFields, settings},
    entities::{equipment, fixed_costs, labor, product, variable_costs},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an in-memory database seeded with [`sample_config`]: both sheets,
/// the labor model, two equipment items, and two catalog products.
pub async fn setup_with_sheets() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    settings::seed_from_config(&db, &sample_config()).await?;
    Ok(db)
}

/// The reference business configuration used by seeding tests.
#[must_use]
pub fn sample_config() -> BusinessConfig {
    BusinessConfig {
        fixed_costs: FixedCostsSeed {
            rent: 1200.0,
            water: 80.0,
            electricity: 150.0,
            internet: 100.0,
            accounting: 300.0,
            marketing: 200.0,
            taxes: 150.0,
            other: 100.0,
            monthly_capacity: 200.0,
        },
        variable_costs: VariableCostsSeed {
            sublimation_paper: 0.5,
            photo_paper: 1.2,
            dtf_film: 3.5,
            xerox_cost: 0.15,
            adhesive_vinyl: 0.85,
            power_film: 4.50,
            ink: 0.3,
            press_energy: 0.2,
            printer_energy: 0.1,
            card_fee_percent: 4.99,
            waste_percent: 5.0,
        },
        labor: LaborSeed {
            target_salary: 3000.0,
            days_per_month: 22.0,
            hours_per_day: 8.0,
        },
        equipment: vec![
            EquipmentSeed {
                name: "38x38 Flat Heat Press".to_string(),
                purchase_price: 1800.0,
                useful_life_months: 36.0,
                monthly_usage: 1000.0,
            },
            EquipmentSeed {
                name: "Sublimation Printer".to_string(),
                purchase_price: 1500.0,
                useful_life_months: 24.0,
                monthly_usage: 800.0,
            },
        ],
        products: vec![
            ProductSeed {
                name: "White Ceramic Mug".to_string(),
                product_type: "Sublimation".to_string(),
                material: "sublimation".to_string(),
                blank_cost: 12.50,
                packaging_cost: 1.50,
                production_minutes: 15.0,
                allocate_overhead: true,
            },
            ProductSeed {
                name: "Photo Print 10x15".to_string(),
                product_type: "Photography".to_string(),
                material: "photo".to_string(),
                blank_cost: 0.0,
                packaging_cost: 0.50,
                production_minutes: 2.0,
                allocate_overhead: true,
            },
        ],
    }
}

/// Validated creation fields for the reference mug.
#[must_use]
pub fn mug_fields() -> ProductFields {
    ProductFields {
        name: "White Ceramic Mug".to_string(),
        product_type: "Sublimation".to_string(),
        material: "sublimation".to_string(),
        blank_cost: 12.50,
        packaging_cost: 1.50,
        production_minutes: 15.0,
        allocate_overhead: true,
    }
}

fn epoch() -> chrono::NaiveDateTime {
    chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc()
}

/// The reference mug as a plain model, for pure-engine tests.
#[must_use]
pub fn sample_product() -> product::Model {
    product::Model {
        id: 1,
        name: "White Ceramic Mug".to_string(),
        product_type: "Sublimation".to_string(),
        material: "sublimation".to_string(),
        blank_cost: 12.50,
        packaging_cost: 1.50,
        production_minutes: 15.0,
        allocate_overhead: true,
        is_deleted: false,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

/// The reference overhead sheet: eight fields summing to 2280, capacity 200.
#[must_use]
pub fn sample_fixed_costs() -> fixed_costs::Model {
    fixed_costs::Model {
        id: 1,
        rent: 1200.0,
        water: 80.0,
        electricity: 150.0,
        internet: 100.0,
        accounting: 300.0,
        marketing: 200.0,
        taxes: 150.0,
        other: 100.0,
        monthly_capacity: 200.0,
    }
}

/// The reference consumable sheet (5% waste, 4.99% card fee).
#[must_use]
pub fn sample_variable_costs() -> variable_costs::Model {
    variable_costs::Model {
        id: 1,
        sublimation_paper: 0.5,
        photo_paper: 1.2,
        dtf_film: 3.5,
        xerox_cost: 0.15,
        adhesive_vinyl: 0.85,
        power_film: 4.50,
        ink: 0.3,
        press_energy: 0.2,
        printer_energy: 0.1,
        card_fee_percent: 4.99,
        waste_percent: 5.0,
    }
}

/// The reference press: 1800 over 36 months at 1000 units/month.
#[must_use]
pub fn sample_equipment() -> equipment::Model {
    equipment::Model {
        id: 1,
        name: "38x38 Flat Heat Press".to_string(),
        purchase_price: 1800.0,
        useful_life_months: 36.0,
        monthly_usage: 1000.0,
        is_deleted: false,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

/// The reference labor model with a stored rate of 25.00/hour.
#[must_use]
pub fn sample_labor() -> labor::Model {
    labor::Model {
        id: 1,
        hourly_rate: 25.00,
        target_salary: 3000.0,
        days_per_month: 22.0,
        hours_per_day: 8.0,
    }
}
