//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. It provides functions for establishing database connections and
//! creating all necessary tables based on the entity definitions. The module
//! uses `SeaORM`'s `Schema::create_table_from_entity` method to automatically
//! generate SQL statements from the entity models, ensuring that the database
//! schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Equipment, FixedCosts, Labor, Product, VariableCosts};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is
/// set. This function handles connection errors and provides a clean interface
/// for database access throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            std::fs::create_dir_all("data")?;
            "sqlite://data/pricecraft.sqlite?mode=rwc".to_string()
        }
    };

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation
/// from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate
/// proper SQL statements for table creation. It creates tables for products,
/// equipment, and the three single-row cost sheets. Existing tables are left
/// alone.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let product_table = schema.create_table_from_entity(Product).if_not_exists().to_owned();
    let equipment_table = schema.create_table_from_entity(Equipment).if_not_exists().to_owned();
    let fixed_table = schema.create_table_from_entity(FixedCosts).if_not_exists().to_owned();
    let variable_table = schema
        .create_table_from_entity(VariableCosts)
        .if_not_exists()
        .to_owned();
    let labor_table = schema.create_table_from_entity(Labor).if_not_exists().to_owned();

    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&equipment_table)).await?;
    db.execute(builder.build(&fixed_table)).await?;
    db.execute(builder.build(&variable_table)).await?;
    db.execute(builder.build(&labor_table)).await?;

    Ok(())
}
