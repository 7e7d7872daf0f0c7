use crate::{
    domain::{
        allergen::lexicon::AllergenLexicon,
        common::{MealguardConfig, services::Service},
        safety::pipeline::RecipeSafetyPipeline,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        household::PostgresHouseholdRepository,
        llm::GeminiRecipeGenerator,
        recipe::PostgresGeneratedRecipeRepository,
    },
};

pub type MealguardService =
    Service<PostgresHouseholdRepository, PostgresGeneratedRecipeRepository, GeminiRecipeGenerator>;

pub async fn create_service(config: MealguardConfig) -> Result<MealguardService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let household_repository = PostgresHouseholdRepository::new(postgres.get_db());
    let generated_recipe_repository = PostgresGeneratedRecipeRepository::new(postgres.get_db());
    let recipe_generator = GeminiRecipeGenerator::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.temperature,
    );
    let pipeline = RecipeSafetyPipeline::new(AllergenLexicon::new(config.safety.match_mode));

    tracing::info!(
        match_mode = config.safety.match_mode.as_str(),
        "recipe safety service ready"
    );

    Ok(Service::new(
        household_repository,
        generated_recipe_repository,
        recipe_generator,
        pipeline,
    ))
}
