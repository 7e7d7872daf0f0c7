pub mod generated_recipe_repository;
