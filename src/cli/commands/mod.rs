//! Command handler modules.

/// Area-to-sheet conversion command
pub mod convert;
/// Equipment roster commands
pub mod equipment;
/// Product catalog commands
pub mod product;
/// Quote/price command
pub mod quote;
/// Cost-sheet commands
pub mod settings;
