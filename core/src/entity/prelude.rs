pub use super::family_members::Entity as FamilyMembers;
pub use super::generated_recipes::Entity as GeneratedRecipes;
pub use super::user_preferences::Entity as UserPreferences;
