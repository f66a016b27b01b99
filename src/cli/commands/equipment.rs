//! Equipment roster commands - add, list, remove.

use crate::{core::equipment as equipment_ops, errors::Result};
use clap::Subcommand;
use sea_orm::DatabaseConnection;

/// Subcommands for managing the equipment roster
#[derive(Subcommand)]
pub enum EquipmentCommand {
    /// Register a depreciable asset
    Add {
        /// Asset name (e.g., "38x38 Flat Heat Press")
        name: String,

        /// Purchase price
        #[arg(long)]
        price: f64,

        /// Useful life in months
        #[arg(long)]
        life: f64,

        /// Units produced with this asset per month
        #[arg(long)]
        usage: f64,
    },

    /// List all active equipment with per-unit depreciation
    List,

    /// Soft-delete an asset by id
    Remove {
        /// Id of the asset to remove
        id: i64,
    },
}

/// Executes an equipment subcommand.
///
/// # Errors
/// Propagates validation and database errors from the core layer.
pub async fn run(db: &DatabaseConnection, command: EquipmentCommand) -> Result<()> {
    match command {
        EquipmentCommand::Add {
            name,
            price,
            life,
            usage,
        } => {
            let item = equipment_ops::create_equipment(db, name, price, life, usage).await?;
            println!("Added equipment #{}: {}", item.id, item.name);
        }

        EquipmentCommand::List => {
            let items = equipment_ops::get_all_active_equipment(db).await?;
            if items.is_empty() {
                println!("No equipment registered.");
                return Ok(());
            }
            println!(
                "{:>4}  {:<30} {:>10} {:>8} {:>10} {:>12}",
                "id", "name", "price", "life", "usage", "per-unit"
            );
            for eq in items {
                // Same zero-fallback the engine applies
                let per_unit = if eq.useful_life_months > 0.0 && eq.monthly_usage > 0.0 {
                    (eq.purchase_price / eq.useful_life_months) / eq.monthly_usage
                } else {
                    0.0
                };
                println!(
                    "{:>4}  {:<30} {:>10.2} {:>8.1} {:>10.1} {:>12.4}",
                    eq.id, eq.name, eq.purchase_price, eq.useful_life_months, eq.monthly_usage, per_unit
                );
            }
        }

        EquipmentCommand::Remove { id } => {
            let deleted = equipment_ops::delete_equipment(db, id).await?;
            println!("Removed equipment #{}: {}", deleted.id, deleted.name);
        }
    }

    Ok(())
}
