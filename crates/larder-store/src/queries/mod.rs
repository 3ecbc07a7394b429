//! SQL query modules, one per table concern.

pub mod inventory_ops;
pub mod recipe_ops;
pub mod recipe_search;
pub mod settings_ops;
