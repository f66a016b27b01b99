//! Product catalog commands - add, list, update, remove.

use crate::{
    core::product::{self as product_ops, ProductFields},
    errors::{Error, Result},
};
use clap::Subcommand;
use sea_orm::DatabaseConnection;

/// Subcommands for managing the product catalog
#[derive(Subcommand)]
pub enum ProductCommand {
    /// Add a new product
    Add {
        /// Unique product name (e.g., "White Ceramic Mug")
        name: String,

        /// Free-form production category (e.g., "Sublimation")
        #[arg(long = "type", default_value = "")]
        product_type: String,

        /// Main material: sublimation, photo, dtf, xerox, adhesive, powerfilm, none
        #[arg(long, default_value = "none")]
        material: String,

        /// Cost of the blank item before customization
        #[arg(long, default_value_t = 0.0)]
        blank_cost: f64,

        /// Packaging cost per unit
        #[arg(long, default_value_t = 0.0)]
        packaging_cost: f64,

        /// Production time per unit, in minutes
        #[arg(long, default_value_t = 0.0)]
        minutes: f64,

        /// Price this product standalone, without a fixed-overhead share
        #[arg(long)]
        no_overhead: bool,
    },

    /// List all active products
    List,

    /// Update an existing product (unspecified fields keep their value)
    Update {
        /// Id of the product to update
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New production category
        #[arg(long = "type")]
        product_type: Option<String>,

        /// New material tag
        #[arg(long)]
        material: Option<String>,

        /// New blank item cost
        #[arg(long)]
        blank_cost: Option<f64>,

        /// New packaging cost
        #[arg(long)]
        packaging_cost: Option<f64>,

        /// New production time in minutes
        #[arg(long)]
        minutes: Option<f64>,

        /// New overhead-allocation flag
        #[arg(long)]
        allocate_overhead: Option<bool>,
    },

    /// Soft-delete a product by id
    Remove {
        /// Id of the product to remove
        id: i64,
    },
}

/// Executes a product subcommand.
///
/// # Errors
/// Propagates validation and database errors from the core layer.
pub async fn run(db: &DatabaseConnection, command: ProductCommand) -> Result<()> {
    match command {
        ProductCommand::Add {
            name,
            product_type,
            material,
            blank_cost,
            packaging_cost,
            minutes,
            no_overhead,
        } => {
            let product = product_ops::create_product(
                db,
                ProductFields {
                    name,
                    product_type,
                    material,
                    blank_cost,
                    packaging_cost,
                    production_minutes: minutes,
                    allocate_overhead: !no_overhead,
                },
            )
            .await?;
            println!("Added product #{}: {}", product.id, product.name);
        }

        ProductCommand::List => {
            let products = product_ops::get_all_active_products(db).await?;
            if products.is_empty() {
                println!("No products registered.");
                return Ok(());
            }
            println!(
                "{:>4}  {:<30} {:<12} {:>10} {:>10} {:>8}  overhead",
                "id", "name", "material", "blank", "packaging", "minutes"
            );
            for p in products {
                println!(
                    "{:>4}  {:<30} {:<12} {:>10.2} {:>10.2} {:>8.1}  {}",
                    p.id,
                    p.name,
                    p.material,
                    p.blank_cost,
                    p.packaging_cost,
                    p.production_minutes,
                    if p.allocate_overhead { "yes" } else { "no" }
                );
            }
        }

        ProductCommand::Update {
            id,
            name,
            product_type,
            material,
            blank_cost,
            packaging_cost,
            minutes,
            allocate_overhead,
        } => {
            let current = product_ops::get_product_by_id(db, id)
                .await?
                .filter(|p| !p.is_deleted)
                .ok_or_else(|| Error::ProductNotFound {
                    name: id.to_string(),
                })?;

            let updated = product_ops::update_product(
                db,
                id,
                ProductFields {
                    name: name.unwrap_or(current.name),
                    product_type: product_type.unwrap_or(current.product_type),
                    material: material.unwrap_or(current.material),
                    blank_cost: blank_cost.unwrap_or(current.blank_cost),
                    packaging_cost: packaging_cost.unwrap_or(current.packaging_cost),
                    production_minutes: minutes.unwrap_or(current.production_minutes),
                    allocate_overhead: allocate_overhead.unwrap_or(current.allocate_overhead),
                },
            )
            .await?;
            println!("Updated product #{}: {}", updated.id, updated.name);
        }

        ProductCommand::Remove { id } => {
            let deleted = product_ops::delete_product(db, id).await?;
            println!("Removed product #{}: {}", deleted.id, deleted.name);
        }
    }

    Ok(())
}
