//! Core business logic - framework-agnostic operations over the workshop's
//! records, and the pure pricing engine itself.

/// Area-to-sheet cost conversion for bulk material purchases
pub mod converter;
/// Depreciable-asset roster operations
pub mod equipment;
/// Labor-rate derivation and synchronization
pub mod labor;
/// The pure pricing engine
pub mod pricing;
/// Product catalog operations
pub mod product;
/// Quote assembly, rendering, and export
pub mod quote;
/// Cost-sheet accessors and seeding
pub mod settings;
