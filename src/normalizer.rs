//! Maps untrusted model replies onto typed domain records.
//!
//! The envelope text is parsed directly as JSON (no markdown-fence recovery);
//! field-level leniency is handled by one declarative payload schema rather
//! than ad hoc probing: every payload field decodes to "the typed value, or
//! None on absence or type mismatch", and defaults are applied in a single
//! mapping pass.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::api_connection::connection::GenAiError;
use crate::api_connection::endpoints::GenerateContentResponse;
use crate::records::{
    Difficulty, MealType, NewIngredient, NewInstruction, NewNutrition, NewRecipe, SourceType,
    Substitution, SubstitutionCategory,
};

/// A field that decodes to `None` instead of failing when the payload value
/// has the wrong type. Missing fields also become `None` via `Default`.
#[derive(Debug, Clone)]
struct Lenient<T>(Option<T>);

impl<T> Default for Lenient<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self(T::deserialize(value).ok()))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RecipePayload {
    title: Lenient<String>,
    description: Lenient<String>,
    #[serde(rename = "cookTime")]
    cook_time: Lenient<u32>,
    #[serde(rename = "prepTime")]
    prep_time: Lenient<u32>,
    servings: Lenient<u32>,
    cuisine: Lenient<String>,
    #[serde(rename = "mealType")]
    meal_type: Lenient<String>,
    ingredients: Lenient<Vec<IngredientPayload>>,
    instructions: Lenient<Vec<InstructionPayload>>,
    nutrition: Lenient<NutritionPayload>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct IngredientPayload {
    item: Lenient<String>,
    quantity: Lenient<f64>,
    unit: Lenient<String>,
    section: Lenient<String>,
}

// stepNumber is deliberately not declared: positions are reassigned from
// array order, overriding whatever the model supplied.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InstructionPayload {
    instruction: Lenient<String>,
    #[serde(rename = "timeMinutes")]
    time_minutes: Lenient<u32>,
    tip: Lenient<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct NutritionPayload {
    calories: Lenient<f64>,
    protein: Lenient<f64>,
    carbohydrates: Lenient<f64>,
    fat: Lenient<f64>,
    fiber: Lenient<f64>,
    sugar: Lenient<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SubstitutionPayload {
    original: Lenient<String>,
    alternative: Lenient<String>,
    reason: Lenient<String>,
    category: Lenient<String>,
}

/// Locates the generated text inside the transport envelope: first candidate,
/// first content part. Absent or blank text is `EmptyGeneration`.
pub fn extract_text(response: &GenerateContentResponse) -> Result<&str, GenAiError> {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .map(|part| part.text.trim())
        .filter(|text| !text.is_empty())
        .ok_or(GenAiError::EmptyGeneration)
}

/// Normalizes a generation reply into a recipe draft ready for the store.
pub fn normalize_recipe(response: &GenerateContentResponse) -> Result<NewRecipe, GenAiError> {
    let text = extract_text(response)?;
    let payload: RecipePayload =
        serde_json::from_str(text).map_err(GenAiError::MalformedPayload)?;
    Ok(map_recipe(payload))
}

fn map_recipe(payload: RecipePayload) -> NewRecipe {
    let ingredients = payload
        .ingredients
        .0
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, ingredient)| NewIngredient {
            item: ingredient.item.0.unwrap_or_default(),
            quantity: ingredient.quantity.0.filter(|quantity| *quantity >= 0.0),
            unit: ingredient.unit.0,
            section: ingredient.section.0,
            order: index as u32,
        })
        .collect();

    let instructions = payload
        .instructions
        .0
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, instruction)| NewInstruction {
            step_number: index as u32 + 1,
            instruction: instruction.instruction.0.unwrap_or_default(),
            time_minutes: instruction.time_minutes.0,
            tip: instruction.tip.0,
        })
        .collect();

    let nutrition = payload.nutrition.0.map(|nutrition| NewNutrition {
        calories: non_negative_or_zero(nutrition.calories.0),
        protein: non_negative_or_zero(nutrition.protein.0),
        carbohydrates: non_negative_or_zero(nutrition.carbohydrates.0),
        fat: non_negative_or_zero(nutrition.fat.0),
        fiber: nutrition.fiber.0.filter(|value| *value >= 0.0),
        sugar: nutrition.sugar.0.filter(|value| *value >= 0.0),
    });

    NewRecipe {
        title: payload
            .title
            .0
            .unwrap_or_else(|| "Untitled Recipe".to_string()),
        description: payload.description.0,
        cook_time: payload.cook_time.0.unwrap_or(30),
        prep_time: payload.prep_time.0.unwrap_or(15),
        servings: payload.servings.0.filter(|servings| *servings >= 1).unwrap_or(4),
        // The app this reproduces pins every generated recipe to medium,
        // whatever difficulty was requested. Kept as-is, regression-tested.
        difficulty: Difficulty::Medium,
        cuisine: payload.cuisine.0,
        meal_type: payload
            .meal_type
            .0
            .as_deref()
            .and_then(MealType::parse_lenient),
        source_type: SourceType::AiGenerated,
        ingredients,
        instructions,
        nutrition,
    }
}

fn non_negative_or_zero(value: Option<f64>) -> f64 {
    value.filter(|value| *value >= 0.0).unwrap_or(0.0)
}

/// Normalizes a substitution reply. The top level must be a JSON array; an
/// empty array is zero suggestions, anything non-array is `MalformedPayload`.
pub fn normalize_substitutions(
    response: &GenerateContentResponse,
    queried_ingredient: &str,
) -> Result<Vec<Substitution>, GenAiError> {
    let text = extract_text(response)?;
    let payload: Vec<SubstitutionPayload> =
        serde_json::from_str(text).map_err(GenAiError::MalformedPayload)?;
    Ok(payload
        .into_iter()
        .map(|substitution| Substitution {
            original: substitution
                .original
                .0
                .unwrap_or_else(|| queried_ingredient.to_string()),
            alternative: substitution.alternative.0.unwrap_or_default(),
            reason: substitution.reason.0.unwrap_or_default(),
            category: substitution
                .category
                .0
                .as_deref()
                .map(SubstitutionCategory::parse_or_default)
                .unwrap_or(SubstitutionCategory::Preference),
        })
        .collect())
}

/// Chat replies are free text; the extracted part is returned verbatim.
pub fn normalize_chat_reply(response: &GenerateContentResponse) -> Result<String, GenAiError> {
    extract_text(response).map(|text| text.to_string())
}
