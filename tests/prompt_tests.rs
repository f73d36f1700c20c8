use recipe_gen::api_connection::endpoints::{ChatMessage, ChatRole};
use recipe_gen::prompt_builder::{
    build_chat_prompt, build_generation_prompt, build_substitution_prompt,
};
use recipe_gen::records::{
    Difficulty, NewIngredient, NewInstruction, NewRecipe, SourceType,
};
use recipe_gen::store::RecordStore;

fn sample_ingredients() -> Vec<String> {
    vec![
        "chicken breast".to_string(),
        "rice".to_string(),
        "broccoli".to_string(),
    ]
}

#[test]
fn generation_prompt_lists_every_ingredient() {
    let prompt = build_generation_prompt(&sample_ingredients(), None, Difficulty::Hard, 45);
    assert!(prompt.contains("chicken breast"));
    assert!(prompt.contains("rice"));
    assert!(prompt.contains("broccoli"));
    assert!(prompt.contains("hard"));
    assert!(prompt.contains("45 minutes"));
}

#[test]
fn generation_prompt_omits_cuisine_line_when_unset() {
    let prompt = build_generation_prompt(&sample_ingredients(), None, Difficulty::Hard, 45);
    assert!(!prompt.contains("Cuisine:"));

    let prompt = build_generation_prompt(
        &sample_ingredients(),
        Some("italian"),
        Difficulty::Easy,
        30,
    );
    assert!(prompt.contains("Cuisine: italian"));
}

#[test]
fn generation_prompt_describes_the_expected_schema() {
    let prompt = build_generation_prompt(&sample_ingredients(), None, Difficulty::Medium, 30);
    for field in [
        "\"title\"",
        "\"cookTime\"",
        "\"prepTime\"",
        "\"servings\"",
        "\"mealType\"",
        "\"ingredients\"",
        "\"instructions\"",
        "\"nutrition\"",
    ] {
        assert!(prompt.contains(field), "prompt is missing {}", field);
    }
}

#[test]
fn substitution_prompt_includes_constraints() {
    let constraints = vec!["vegan".to_string(), "gluten-free".to_string()];
    let prompt = build_substitution_prompt("butter", &constraints);
    assert!(prompt.contains("butter"));
    assert!(prompt.contains("vegan"));
    assert!(prompt.contains("gluten-free"));
    assert!(prompt.contains("JSON array"));
}

#[test]
fn substitution_prompt_without_constraints_has_no_constraint_line() {
    let prompt = build_substitution_prompt("butter", &[]);
    assert!(!prompt.contains("dietary constraints"));
}

#[test]
fn chat_prompt_embeds_recipe_context_history_and_question() {
    let mut store = RecordStore::new();
    let id = store.insert_recipe(NewRecipe {
        title: "Garlic Noodles".to_string(),
        description: Some("Fast and punchy.".to_string()),
        cook_time: 10,
        prep_time: 5,
        servings: 2,
        difficulty: Difficulty::Easy,
        cuisine: None,
        meal_type: None,
        source_type: SourceType::Original,
        ingredients: vec![NewIngredient {
            item: "noodles".to_string(),
            quantity: Some(200.0),
            unit: Some("g".to_string()),
            section: None,
            order: 0,
        }],
        instructions: vec![NewInstruction {
            step_number: 1,
            instruction: "Boil the noodles".to_string(),
            time_minutes: Some(4),
            tip: None,
        }],
        nutrition: None,
    });
    let aggregate = store.recipe(id).unwrap();

    let history = vec![
        ChatMessage {
            role: ChatRole::User,
            content: "Can I use spaghetti?".to_string(),
        },
        ChatMessage {
            role: ChatRole::Assistant,
            content: "Yes, any long noodle works.".to_string(),
        },
    ];

    let prompt = build_chat_prompt(&aggregate, &history, "How much garlic should I add?");
    assert!(prompt.contains("Garlic Noodles"));
    assert!(prompt.contains("Fast and punchy."));
    assert!(prompt.contains("200 g noodles"));
    assert!(prompt.contains("1. Boil the noodles"));
    assert!(prompt.contains("User: Can I use spaghetti?"));
    assert!(prompt.contains("Assistant: Yes, any long noodle works."));
    assert!(prompt.contains("User: How much garlic should I add?"));
}
