pub mod allergen;
pub mod common;
pub mod household;
pub mod recipe;
pub mod safety;
