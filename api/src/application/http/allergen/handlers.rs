pub mod list_allergens;
