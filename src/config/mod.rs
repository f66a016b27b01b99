/// Business seed configuration loading from config.toml
pub mod business;

/// Database configuration and connection management
pub mod database;
