use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
        pub struct $name(u64);

        impl $name {
            pub const INITIAL: Self = Self(1);

            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }
    };
}

id_newtype!(RecipeId);
id_newtype!(IngredientId);
id_newtype!(InstructionId);
id_newtype!(NutritionId);
id_newtype!(CollectionId);

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!(
                "unknown difficulty '{}', expected easy, medium, or hard",
                other
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl MealType {
    /// Case-insensitive match against the fixed set; anything else is None.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "dessert" => Some(Self::Dessert),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Original,
    AiGenerated,
    Imported,
    Ocr,
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionCategory {
    Vegan,
    Kosher,
    Allergy,
    Preference,
    Availability,
}

impl SubstitutionCategory {
    /// Case-sensitive match; unrecognized values fall back to Preference.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "vegan" => Self::Vegan,
            "kosher" => Self::Kosher,
            "allergy" => Self::Allergy,
            "preference" => Self::Preference,
            "availability" => Self::Availability,
            _ => Self::Preference,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: Option<String>,
    pub cook_time: u32,
    pub prep_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: Option<String>,
    pub meal_type: Option<MealType>,
    pub source_type: SourceType,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub recipe_id: RecipeId,
    pub item: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub section: Option<String>,
    pub order: u32,
}

impl Ingredient {
    /// Flattened form used when embedding a recipe into a chat prompt,
    /// e.g. "1.5 cups rice" or just "rice" when unquantified.
    pub fn display_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(quantity) = self.quantity {
            parts.push(format_quantity(quantity));
        }
        if let Some(unit) = &self.unit {
            parts.push(unit.clone());
        }
        parts.push(self.item.clone());
        parts.join(" ")
    }
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Instruction {
    pub id: InstructionId,
    pub recipe_id: RecipeId,
    pub step_number: u32,
    pub instruction: String,
    pub time_minutes: Option<u32>,
    pub tip: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Nutrition {
    pub id: NutritionId,
    pub recipe_id: RecipeId,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub description: Option<String>,
}

/// Transient substitution suggestion; produced per query, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Substitution {
    pub original: String,
    pub alternative: String,
    pub reason: String,
    pub category: SubstitutionCategory,
}

/// A recipe together with its owned child records, reassembled from the store
/// (ingredients ordered by `order`, instructions by `step_number`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeAggregate {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub nutrition: Option<Nutrition>,
}

/// Draft shapes carry no ids; the store assigns them on insert.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub cook_time: u32,
    pub prep_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: Option<String>,
    pub meal_type: Option<MealType>,
    pub source_type: SourceType,
    pub ingredients: Vec<NewIngredient>,
    pub instructions: Vec<NewInstruction>,
    pub nutrition: Option<NewNutrition>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewIngredient {
    pub item: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub section: Option<String>,
    pub order: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewInstruction {
    pub step_number: u32,
    pub instruction: String,
    pub time_minutes: Option<u32>,
    pub tip: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
}
