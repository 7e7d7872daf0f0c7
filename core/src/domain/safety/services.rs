use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    household::ports::HouseholdRepository,
    recipe::{
        entities::GeneratedRecipe,
        helpers::parse_candidate_recipe,
        ports::{GeneratedRecipeRepository, RecipeGenerator},
        prompt::build_recipe_prompt,
        schema::get_candidate_recipe_schema,
        value_objects::{
            GenerateRecipeInput, GetGeneratedRecipesFilter, GetGeneratedRecipesInput,
        },
    },
    safety::{
        ports::RecipeSafetyService,
        value_objects::{AssessRecipeInput, AssessedRecipe, SafetyAssessment},
    },
};

impl<H, GR, LLM> RecipeSafetyService for Service<H, GR, LLM>
where
    H: HouseholdRepository,
    GR: GeneratedRecipeRepository,
    LLM: RecipeGenerator,
{
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn assess_recipe(
        &self,
        input: AssessRecipeInput,
    ) -> Result<SafetyAssessment, CoreError> {
        let household = self
            .household_repository
            .get_by_user_id(input.user_id)
            .await?
            .ok_or(CoreError::HouseholdNotFound)?;

        Ok(self.pipeline.assess(&input.candidate, &household))
    }

    #[instrument(
        skip(self, input),
        fields(user_id = %input.user_id, meal_type = input.meal_type.as_str())
    )]
    async fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> Result<AssessedRecipe, CoreError> {
        let household = self
            .household_repository
            .get_by_user_id(input.user_id)
            .await?
            .ok_or(CoreError::HouseholdNotFound)?;

        let prompt = build_recipe_prompt(&household, &input, self.pipeline.lexicon());
        let raw_response = self
            .recipe_generator
            .generate_with_text(prompt, get_candidate_recipe_schema())
            .await?;

        let candidate = parse_candidate_recipe(&raw_response)?;
        let assessment = self.pipeline.assess(&candidate, &household);
        tracing::info!(
            safety_score = assessment.safety_score,
            band = assessment.band().as_str(),
            "generated recipe assessed"
        );

        let recipe = GeneratedRecipe::new(
            input.user_id,
            input.meal_type.as_str().to_string(),
            candidate,
            &assessment,
        );
        let recipe = self.generated_recipe_repository.create(recipe).await?;

        Ok(AssessedRecipe { recipe, assessment })
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn get_generated_recipes(
        &self,
        input: GetGeneratedRecipesInput,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let filter = GetGeneratedRecipesFilter {
            offset: input.offset,
            limit: input.limit,
        };

        self.generated_recipe_repository
            .get_by_user_id(input.user_id, filter)
            .await
    }
}
