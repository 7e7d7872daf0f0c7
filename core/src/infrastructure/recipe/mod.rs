pub mod mappers;
pub mod repositories;

pub use repositories::generated_recipe_repository::PostgresGeneratedRecipeRepository;
