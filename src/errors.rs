//! Unified error types for `pricecraft`.
//!
//! The pricing arithmetic itself never fails (every divide-by-zero is
//! absorbed by a clamp or zero-fallback); errors only arise from record
//! validation, configuration, and database access.

use thiserror::Error;

/// All errors the application can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A monetary amount or duration was negative or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// Product lookup by id or name found nothing (or a deleted row)
    #[error("Product not found: {name}")]
    ProductNotFound {
        /// Identifier the caller used
        name: String,
    },

    /// Equipment lookup by id found nothing (or a deleted row)
    #[error("Equipment not found: {name}")]
    EquipmentNotFound {
        /// Identifier the caller used
        name: String,
    },

    /// A product referenced a material tag outside the closed set
    #[error("Unknown material '{tag}' (expected one of: {expected})")]
    UnknownMaterial {
        /// The unrecognized tag
        tag: String,
        /// Comma-separated list of accepted tags
        expected: String,
    },

    /// A cost sheet row is missing from the database (seed did not run)
    #[error("Cost sheet '{sheet}' has not been initialized")]
    SheetMissing {
        /// Which sheet table was empty
        sheet: &'static str,
    },

    /// Quote export serialization failed
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

// Convenience `Result` type
/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
