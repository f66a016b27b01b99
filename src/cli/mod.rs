//! Command-line interface - argument definitions and dispatch.
//!
//! The CLI is a thin layer over `core`: it parses arguments, resolves
//! records, and prints results. No pricing or validation logic lives here.

/// Command handlers, one module per record family
pub mod commands;

use crate::{core::converter::A4_SHEET_AREA_CM2, errors::Result};
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;

/// Order pricing for a custom-goods workshop
#[derive(Parser)]
#[command(name = "pricecraft")]
#[command(version)]
#[command(about = "Itemized order pricing for a custom-goods workshop")]
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Price an order and print the itemized breakdown
    Price {
        /// Product to price, by id or by exact name
        product: String,

        /// Ordered quantity (values below 1 are priced as 1)
        #[arg(long, short = 'q', default_value_t = 1)]
        quantity: i64,

        /// Desired margin percent over total cost
        #[arg(long, short = 'm', default_value_t = 100.0)]
        margin: f64,

        /// Emit the full quote (input snapshot plus breakdown) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a bulk-material purchase into a cost per reference sheet
    Convert {
        /// Material width in cm
        #[arg(long)]
        width: f64,

        /// Material length in cm
        #[arg(long)]
        length: f64,

        /// Price paid for the piece
        #[arg(long)]
        price: f64,

        /// Reference area in cm2 (defaults to one A4 sheet)
        #[arg(long, default_value_t = A4_SHEET_AREA_CM2)]
        area: f64,
    },

    /// Manage the product catalog
    #[command(subcommand)]
    Product(commands::product::ProductCommand),

    /// Manage the equipment roster
    #[command(subcommand)]
    Equipment(commands::equipment::EquipmentCommand),

    /// Show or edit the cost sheets
    #[command(subcommand)]
    Settings(commands::settings::SettingsCommand),
}

/// Dispatches a parsed command against the database.
///
/// # Errors
/// Propagates any error from the underlying core operation.
pub async fn run(cli: Cli, db: &DatabaseConnection) -> Result<()> {
    match cli.command {
        Commands::Price {
            product,
            quantity,
            margin,
            json,
        } => commands::quote::price(db, &product, quantity, margin, json).await,
        Commands::Convert {
            width,
            length,
            price,
            area,
        } => commands::convert::convert(width, length, price, area),
        Commands::Product(cmd) => commands::product::run(db, cmd).await,
        Commands::Equipment(cmd) => commands::equipment::run(db, cmd).await,
        Commands::Settings(cmd) => commands::settings::run(db, cmd).await,
    }
}
