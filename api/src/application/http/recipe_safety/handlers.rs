pub mod assess_recipe;
pub mod generate_recipe;
pub mod get_generated_recipes;
