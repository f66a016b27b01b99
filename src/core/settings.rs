//! Cost-sheet business logic - The single-row settings records.
//!
//! The fixed-cost sheet, variable-cost sheet, and labor model each live in a
//! one-row table. Reads error if the seed never ran; writes clamp every
//! numeric field at zero, mirroring how the record owners are expected to
//! maintain them. Saving labor re-derives the hourly rate so the stored
//! value never goes stale.

use crate::{
    config::business::BusinessConfig,
    core::{
        equipment as equipment_ops, labor as labor_ops, product as product_ops,
        product::ProductFields,
    },
    entities::{FixedCosts, Labor, VariableCosts, fixed_costs, labor, variable_costs},
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

/// Loads the fixed-cost sheet.
///
/// # Errors
/// Returns [`Error::SheetMissing`] if the seed never ran.
pub async fn get_fixed_costs(db: &DatabaseConnection) -> Result<fixed_costs::Model> {
    FixedCosts::find().one(db).await?.ok_or(Error::SheetMissing {
        sheet: "fixed_costs",
    })
}

/// Loads the variable-cost sheet.
///
/// # Errors
/// Returns [`Error::SheetMissing`] if the seed never ran.
pub async fn get_variable_costs(db: &DatabaseConnection) -> Result<variable_costs::Model> {
    VariableCosts::find()
        .one(db)
        .await?
        .ok_or(Error::SheetMissing {
            sheet: "variable_costs",
        })
}

/// Loads the labor model.
///
/// # Errors
/// Returns [`Error::SheetMissing`] if the seed never ran.
pub async fn get_labor(db: &DatabaseConnection) -> Result<labor::Model> {
    Labor::find()
        .one(db)
        .await?
        .ok_or(Error::SheetMissing { sheet: "labor" })
}

/// Saves the fixed-cost sheet, clamping every field at zero.
///
/// # Errors
/// Returns an error if the row is missing or the update fails.
pub async fn save_fixed_costs(
    db: &DatabaseConnection,
    sheet: fixed_costs::Model,
) -> Result<fixed_costs::Model> {
    let active = fixed_costs::ActiveModel {
        id: Set(sheet.id),
        rent: Set(sheet.rent.max(0.0)),
        water: Set(sheet.water.max(0.0)),
        electricity: Set(sheet.electricity.max(0.0)),
        internet: Set(sheet.internet.max(0.0)),
        accounting: Set(sheet.accounting.max(0.0)),
        marketing: Set(sheet.marketing.max(0.0)),
        taxes: Set(sheet.taxes.max(0.0)),
        other: Set(sheet.other.max(0.0)),
        monthly_capacity: Set(sheet.monthly_capacity.max(0.0)),
    };
    active.update(db).await.map_err(Into::into)
}

/// Saves the variable-cost sheet, clamping every field at zero.
///
/// # Errors
/// Returns an error if the row is missing or the update fails.
pub async fn save_variable_costs(
    db: &DatabaseConnection,
    sheet: variable_costs::Model,
) -> Result<variable_costs::Model> {
    let active = variable_costs::ActiveModel {
        id: Set(sheet.id),
        sublimation_paper: Set(sheet.sublimation_paper.max(0.0)),
        photo_paper: Set(sheet.photo_paper.max(0.0)),
        dtf_film: Set(sheet.dtf_film.max(0.0)),
        xerox_cost: Set(sheet.xerox_cost.max(0.0)),
        adhesive_vinyl: Set(sheet.adhesive_vinyl.max(0.0)),
        power_film: Set(sheet.power_film.max(0.0)),
        ink: Set(sheet.ink.max(0.0)),
        press_energy: Set(sheet.press_energy.max(0.0)),
        printer_energy: Set(sheet.printer_energy.max(0.0)),
        card_fee_percent: Set(sheet.card_fee_percent.max(0.0)),
        waste_percent: Set(sheet.waste_percent.max(0.0)),
    };
    active.update(db).await.map_err(Into::into)
}

/// Saves the labor schedule and re-derives the hourly rate from it.
///
/// # Errors
/// Returns an error if the row is missing or the update fails.
pub async fn save_labor(
    db: &DatabaseConnection,
    target_salary: f64,
    days_per_month: f64,
    hours_per_day: f64,
) -> Result<labor::Model> {
    let current = get_labor(db).await?;

    let target_salary = target_salary.max(0.0);
    let days_per_month = days_per_month.max(0.0);
    let hours_per_day = hours_per_day.max(0.0);

    let active = labor::ActiveModel {
        id: Set(current.id),
        hourly_rate: Set(labor_ops::derive_hourly_rate(
            target_salary,
            days_per_month,
            hours_per_day,
        )),
        target_salary: Set(target_salary),
        days_per_month: Set(days_per_month),
        hours_per_day: Set(hours_per_day),
    };
    active.update(db).await.map_err(Into::into)
}

/// Seeds empty tables from the business configuration.
///
/// Each sheet is inserted only if its table has no row; the equipment and
/// product rosters are seeded only when completely empty, so user edits are
/// never overwritten on restart.
///
/// # Errors
/// Returns an error if any insert fails.
pub async fn seed_from_config(db: &DatabaseConnection, config: &BusinessConfig) -> Result<()> {
    if FixedCosts::find().one(db).await?.is_none() {
        let seed = &config.fixed_costs;
        fixed_costs::ActiveModel {
            rent: Set(seed.rent),
            water: Set(seed.water),
            electricity: Set(seed.electricity),
            internet: Set(seed.internet),
            accounting: Set(seed.accounting),
            marketing: Set(seed.marketing),
            taxes: Set(seed.taxes),
            other: Set(seed.other),
            monthly_capacity: Set(seed.monthly_capacity),
            ..Default::default()
        }
        .insert(db)
        .await?;
        tracing::info!("seeded fixed-cost sheet from config");
    }

    if VariableCosts::find().one(db).await?.is_none() {
        let seed = &config.variable_costs;
        variable_costs::ActiveModel {
            sublimation_paper: Set(seed.sublimation_paper),
            photo_paper: Set(seed.photo_paper),
            dtf_film: Set(seed.dtf_film),
            xerox_cost: Set(seed.xerox_cost),
            adhesive_vinyl: Set(seed.adhesive_vinyl),
            power_film: Set(seed.power_film),
            ink: Set(seed.ink),
            press_energy: Set(seed.press_energy),
            printer_energy: Set(seed.printer_energy),
            card_fee_percent: Set(seed.card_fee_percent),
            waste_percent: Set(seed.waste_percent),
            ..Default::default()
        }
        .insert(db)
        .await?;
        tracing::info!("seeded variable-cost sheet from config");
    }

    if Labor::find().one(db).await?.is_none() {
        let seed = &config.labor;
        labor::ActiveModel {
            hourly_rate: Set(labor_ops::derive_hourly_rate(
                seed.target_salary,
                seed.days_per_month,
                seed.hours_per_day,
            )),
            target_salary: Set(seed.target_salary),
            days_per_month: Set(seed.days_per_month),
            hours_per_day: Set(seed.hours_per_day),
            ..Default::default()
        }
        .insert(db)
        .await?;
        tracing::info!("seeded labor model from config");
    }

    if crate::entities::Equipment::find().count(db).await? == 0 {
        for seed in &config.equipment {
            equipment_ops::create_equipment(
                db,
                seed.name.clone(),
                seed.purchase_price,
                seed.useful_life_months,
                seed.monthly_usage,
            )
            .await?;
        }
        if !config.equipment.is_empty() {
            tracing::info!(count = config.equipment.len(), "seeded equipment roster");
        }
    }

    if crate::entities::Product::find().count(db).await? == 0 {
        for seed in &config.products {
            product_ops::create_product(
                db,
                ProductFields {
                    name: seed.name.clone(),
                    product_type: seed.product_type.clone(),
                    material: seed.material.clone(),
                    blank_cost: seed.blank_cost,
                    packaging_cost: seed.packaging_cost,
                    production_minutes: seed.production_minutes,
                    allocate_overhead: seed.allocate_overhead,
                },
            )
            .await?;
        }
        if !config.products.is_empty() {
            tracing::info!(count = config.products.len(), "seeded product catalog");
        }
    }

    Ok(())
}
