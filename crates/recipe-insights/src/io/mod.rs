//! CSV loaders for the recipe exports.
pub mod tables;

pub use tables::{
    parse_timestamp, read_dataset, read_ingredients, read_interactions, read_recipes,
    read_users, TableSchema, INGREDIENTS, INTERACTIONS, RECIPES, USERS,
};
