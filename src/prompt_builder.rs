use crate::api_connection::endpoints::ChatMessage;
use crate::records::{Difficulty, RecipeAggregate};

/// Builds the recipe-generation prompt. Pure string formatting; the
/// `Cuisine:` line is only emitted when a cuisine was requested.
pub fn build_generation_prompt(
    ingredients: &[String],
    cuisine: Option<&str>,
    difficulty: Difficulty,
    target_cook_time_minutes: u32,
) -> String {
    let mut prompt = String::from(
        "You are a recipe creation assistant. Create a complete recipe using the ingredients below.\n",
    );
    prompt.push_str(&format!("Ingredients: {}\n", ingredients.join(", ")));
    if let Some(cuisine) = cuisine {
        prompt.push_str(&format!("Cuisine: {}\n", cuisine));
    }
    prompt.push_str(&format!("Difficulty: {}\n", difficulty.as_str()));
    prompt.push_str(&format!(
        "Target cook time: {} minutes\n",
        target_cook_time_minutes
    ));
    prompt.push_str(
        "\nReturn the recipe as a JSON object. The JSON object must be the only content in your response. \
Do not include any explanatory text, comments, or markdown formatting (like ```json) before or after the JSON object.\n\
The JSON object must have the following top-level properties:\n\
- \"title\": A string naming the recipe.\n\
- \"description\": A short string describing the dish.\n\
- \"cookTime\": Cooking time in minutes, as an integer.\n\
- \"prepTime\": Preparation time in minutes, as an integer.\n\
- \"servings\": Number of servings, as an integer.\n\
- \"cuisine\": A string naming the cuisine.\n\
- \"mealType\": One of \"breakfast\", \"lunch\", \"dinner\", \"dessert\", \"snack\".\n\
- \"ingredients\": An array of objects, each with \"item\" (string), \"quantity\" (number or null), \"unit\" (string or null), and \"section\" (string or null).\n\
- \"instructions\": An array of objects in cooking order, each with \"stepNumber\" (integer), \"instruction\" (string), \"timeMinutes\" (integer or null), and \"tip\" (string or null).\n\
- \"nutrition\": An object with per-serving \"calories\", \"protein\", \"carbohydrates\", \"fat\", \"fiber\", and \"sugar\" as numbers.\n",
    );
    prompt
}

/// Builds the ingredient-substitution prompt, requesting a bare JSON array.
pub fn build_substitution_prompt(ingredient: &str, constraints: &[String]) -> String {
    let mut prompt = format!(
        "You are a cooking assistant. Suggest substitutions for the ingredient \"{}\".\n",
        ingredient
    );
    if !constraints.is_empty() {
        prompt.push_str(&format!(
            "The substitutions must respect these dietary constraints: {}.\n",
            constraints.join(", ")
        ));
    }
    prompt.push_str(
        "\nRespond with ONLY a JSON array of 3 to 5 substitution objects and nothing else. \
Do not wrap the array in markdown formatting.\n\
Each object in the array must have the following string properties:\n\
- \"original\": The ingredient being replaced.\n\
- \"alternative\": The suggested replacement.\n\
- \"reason\": Why this replacement works.\n\
- \"category\": One of \"vegan\", \"kosher\", \"allergy\", \"preference\", \"availability\".\n",
    );
    prompt
}

/// Builds the recipe-chat prompt: recipe context, the linear conversation so
/// far, then the new question. The reply is used verbatim, so the model is
/// told to answer in plain text.
pub fn build_chat_prompt(
    recipe: &RecipeAggregate,
    history: &[ChatMessage],
    question: &str,
) -> String {
    let mut prompt = String::from(
        "You are a helpful cooking assistant answering questions about the recipe below.\n\n",
    );
    prompt.push_str(&format!("Recipe: {}\n", recipe.recipe.title));
    if let Some(description) = &recipe.recipe.description {
        prompt.push_str(&format!("Description: {}\n", description));
    }
    prompt.push_str("Ingredients:\n");
    for ingredient in &recipe.ingredients {
        prompt.push_str(&format!("- {}\n", ingredient.display_string()));
    }
    prompt.push_str("Instructions:\n");
    for instruction in &recipe.instructions {
        prompt.push_str(&format!(
            "{}. {}\n",
            instruction.step_number, instruction.instruction
        ));
    }
    if !history.is_empty() {
        prompt.push_str("\nConversation so far:\n");
        for message in history {
            prompt.push_str(&format!("{}: {}\n", message.role.as_str(), message.content));
        }
    }
    prompt.push_str(&format!("\nUser: {}\n", question));
    prompt.push_str("Answer the user's question in plain text, without JSON or markdown.\n");
    prompt
}
