//! `SeaORM` entities for the household and recipe tables.

pub mod prelude;

pub mod family_members;
pub mod generated_recipes;
pub mod user_preferences;
