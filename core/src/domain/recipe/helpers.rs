use crate::domain::{
    common::entities::app_errors::CoreError, recipe::entities::CandidateRecipe,
};

/// Parse the raw generator response into a candidate recipe.
/// A markdown code fence around the JSON body is tolerated.
pub fn parse_candidate_recipe(raw_response: &str) -> Result<CandidateRecipe, CoreError> {
    let body = strip_code_fence(raw_response);

    let parsed: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
    })?;

    if !parsed.is_object() {
        return Err(CoreError::ExternalServiceError(
            "LLM response is not a recipe object".to_string(),
        ));
    }

    serde_json::from_value(parsed).map_err(|e| {
        tracing::error!("Invalid recipe format: {}", e);
        CoreError::ExternalServiceError(format!("Invalid recipe format: {}", e))
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Anything on the opening line is a language tag.
    let rest = match rest.split_once('\n') {
        Some((_tag, body)) => body,
        None => rest,
    };
    rest.trim().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let candidate = parse_candidate_recipe(
            r#"{"title": "Omelette", "ingredients": ["3 eggs", "1 tbsp milk"], "servings": 2}"#,
        )
        .unwrap();

        assert_eq!(candidate.title, "Omelette");
        assert_eq!(candidate.ingredients.len(), 2);
        assert_eq!(candidate.servings, Some(2));
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"title\": \"Salad\", \"ingredients\": null}\n```";
        let candidate = parse_candidate_recipe(raw).unwrap();

        assert_eq!(candidate.title, "Salad");
        assert!(candidate.ingredients.is_empty());
    }

    #[test]
    fn test_parse_fence_with_any_language_tag() {
        for raw in [
            "```JSON\n{\"title\": \"Stew\"}\n```",
            "```javascript\n{\"title\": \"Stew\"}\n```",
            "```\n{\"title\": \"Stew\"}\n```",
        ] {
            assert_eq!(parse_candidate_recipe(raw).unwrap().title, "Stew");
        }
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_candidate_recipe("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_candidate_recipe(r#"["1 egg"]"#).unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
