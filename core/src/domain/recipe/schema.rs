use serde_json::json;

/// Returns the JSON schema for candidate recipes produced by the LLM
pub fn get_candidate_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "prep_time_minutes": { "type": "integer" },
            "cook_time_minutes": { "type": "integer" },
            "servings": { "type": "integer" },
            "safety_notes": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": [
            "title", "description", "ingredients", "instructions",
            "prep_time_minutes", "cook_time_minutes", "servings"
        ]
    })
}
