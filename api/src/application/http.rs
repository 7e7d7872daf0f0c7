pub mod allergen;
pub mod health;
pub mod recipe_safety;
pub mod server;
