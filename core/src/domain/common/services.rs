use crate::domain::{
    household::ports::HouseholdRepository,
    recipe::ports::{GeneratedRecipeRepository, RecipeGenerator},
    safety::pipeline::RecipeSafetyPipeline,
};

/// Application service bundling the ports the recipe safety operations need.
#[derive(Clone)]
pub struct Service<H, GR, LLM>
where
    H: HouseholdRepository,
    GR: GeneratedRecipeRepository,
    LLM: RecipeGenerator,
{
    pub(crate) household_repository: H,
    pub(crate) generated_recipe_repository: GR,
    pub(crate) recipe_generator: LLM,
    pub(crate) pipeline: RecipeSafetyPipeline,
}

impl<H, GR, LLM> Service<H, GR, LLM>
where
    H: HouseholdRepository,
    GR: GeneratedRecipeRepository,
    LLM: RecipeGenerator,
{
    pub fn new(
        household_repository: H,
        generated_recipe_repository: GR,
        recipe_generator: LLM,
        pipeline: RecipeSafetyPipeline,
    ) -> Self {
        Self {
            household_repository,
            generated_recipe_repository,
            recipe_generator,
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &RecipeSafetyPipeline {
        &self.pipeline
    }
}
