//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod equipment;
pub mod fixed_costs;
pub mod labor;
pub mod product;
pub mod variable_costs;

// Re-export specific types to avoid conflicts
pub use equipment::{Column as EquipmentColumn, Entity as Equipment, Model as EquipmentModel};
pub use fixed_costs::{Column as FixedCostsColumn, Entity as FixedCosts, Model as FixedCostsModel};
pub use labor::{Column as LaborColumn, Entity as Labor, Model as LaborModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use variable_costs::{
    Column as VariableCostsColumn, Entity as VariableCosts, Model as VariableCostsModel,
};
