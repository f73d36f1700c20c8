use clap::{Parser, Subcommand};

use crate::records::Difficulty;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a recipe from a list of ingredients
    Generate {
        /// Ingredient to cook with (repeat the flag for each one)
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,
        /// Optional cuisine to steer the recipe towards
        #[arg(long)]
        cuisine: Option<String>,
        /// Requested difficulty: easy, medium, or hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,
        /// Target cook time in minutes
        #[arg(long, default_value_t = 30)]
        target_time: u32,
        /// Write the generated recipe as JSON to this path
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Suggest substitutions for an ingredient
    Substitute {
        /// The ingredient to replace
        #[arg(short, long)]
        ingredient: String,
        /// Dietary constraint to respect (repeat the flag for each one)
        #[arg(short, long = "constraint")]
        constraints: Vec<String>,
    },
    /// Ask a question about a previously generated recipe
    Chat {
        /// Path to a recipe JSON file written by `generate --output`
        #[arg(short, long)]
        recipe_file: String,
        /// The question to ask
        #[arg(short, long)]
        question: String,
        /// Optional JSON file holding prior conversation turns
        #[arg(long)]
        history: Option<String>,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
