use anyhow::{Context, Result};
use log::LevelFilter;

use recipe_gen::api_connection::connection::GenAiClient;
use recipe_gen::api_connection::endpoints::ChatMessage;
use recipe_gen::cli::{parse_args, Command};
use recipe_gen::config::{AppConfig, GenAiConfig};
use recipe_gen::normalizer::{normalize_chat_reply, normalize_recipe, normalize_substitutions};
use recipe_gen::prompt_builder::{
    build_chat_prompt, build_generation_prompt, build_substitution_prompt,
};
use recipe_gen::records::{RecipeAggregate, Substitution};
use recipe_gen::store::RecordStore;
use tokio::fs;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .expect("logger init");

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = parse_args();

    // Billing/paywall keys are optional; their absence only disables that
    // subsystem and is reported as a warning inside from_env.
    let _app_config = AppConfig::from_env();

    let client = GenAiClient::new(
        GenAiConfig::from_env().context("generative-text endpoint is not configured")?,
    );

    match cli.command {
        Command::Generate {
            ingredients,
            cuisine,
            difficulty,
            target_time,
            output,
        } => {
            let prompt =
                build_generation_prompt(&ingredients, cuisine.as_deref(), difficulty, target_time);
            let response = client
                .send(&prompt)
                .await
                .context("recipe generation request failed")?;
            let draft = normalize_recipe(&response)
                .context("could not make sense of the generated recipe")?;

            let mut store = RecordStore::new();
            let id = store.insert_recipe(draft);
            let aggregate = store
                .recipe(id)
                .context("stored recipe vanished after insert")?;

            print_recipe(&aggregate);

            if let Some(path) = output {
                let json = serde_json::to_vec_pretty(&aggregate)?;
                fs::write(&path, json)
                    .await
                    .with_context(|| format!("Failed to write recipe to '{}'", path))?;
                println!("\nSaved recipe to {}", path);
            }
        }
        Command::Substitute {
            ingredient,
            constraints,
        } => {
            let prompt = build_substitution_prompt(&ingredient, &constraints);
            let response = client
                .send(&prompt)
                .await
                .context("substitution request failed")?;
            let substitutions = normalize_substitutions(&response, &ingredient)
                .context("could not make sense of the substitution suggestions")?;

            if substitutions.is_empty() {
                println!("No substitutions suggested for {}", ingredient);
            } else {
                print_substitutions(&substitutions);
            }
        }
        Command::Chat {
            recipe_file,
            question,
            history,
        } => {
            let recipe_json = fs::read_to_string(&recipe_file)
                .await
                .with_context(|| format!("Failed to read recipe file '{}'", recipe_file))?;
            let aggregate: RecipeAggregate = serde_json::from_str(&recipe_json)
                .with_context(|| format!("'{}' is not a saved recipe", recipe_file))?;

            let history: Vec<ChatMessage> = match history {
                Some(path) => {
                    let history_json = fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read history file '{}'", path))?;
                    serde_json::from_str(&history_json)
                        .with_context(|| format!("'{}' is not a saved conversation", path))?
                }
                None => Vec::new(),
            };

            let prompt = build_chat_prompt(&aggregate, &history, &question);
            let response = client.send(&prompt).await.context("chat request failed")?;
            let reply = normalize_chat_reply(&response)?;
            println!("{}", reply);
        }
    }

    Ok(())
}

fn print_recipe(aggregate: &RecipeAggregate) {
    let recipe = &aggregate.recipe;
    println!("{}", recipe.title);
    if let Some(description) = &recipe.description {
        println!("{}", description);
    }
    println!(
        "\nServes {} | prep {} min | cook {} min | total {} min | {} difficulty",
        recipe.servings,
        recipe.prep_time,
        recipe.cook_time,
        recipe.total_time(),
        recipe.difficulty.as_str()
    );
    if let Some(cuisine) = &recipe.cuisine {
        println!("Cuisine: {}", cuisine);
    }

    println!("\nIngredients:");
    for ingredient in &aggregate.ingredients {
        println!("- {}", ingredient.display_string());
    }

    println!("\nInstructions:");
    for instruction in &aggregate.instructions {
        print!("{}. {}", instruction.step_number, instruction.instruction);
        if let Some(minutes) = instruction.time_minutes {
            print!(" ({} min)", minutes);
        }
        println!();
        if let Some(tip) = &instruction.tip {
            println!("   Tip: {}", tip);
        }
    }

    if let Some(nutrition) = &aggregate.nutrition {
        println!(
            "\nPer serving: {} kcal, {}g protein, {}g carbs, {}g fat",
            nutrition.calories, nutrition.protein, nutrition.carbohydrates, nutrition.fat
        );
    }
}

fn print_substitutions(substitutions: &[Substitution]) {
    for substitution in substitutions {
        println!(
            "{} -> {} [{:?}]",
            substitution.original, substitution.alternative, substitution.category
        );
        println!("   {}", substitution.reason);
    }
}
