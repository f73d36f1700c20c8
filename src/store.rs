//! Arena-style record storage: one map per record type keyed by id newtypes,
//! with cascade deletion done as an explicit operation instead of an implicit
//! ownership rule. Single-owner, no interior mutability.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;

use crate::records::{
    Collection, CollectionId, Ingredient, IngredientId, Instruction, InstructionId, NewRecipe,
    Nutrition, NutritionId, Recipe, RecipeAggregate, RecipeId,
};

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    EmptyCollectionName,
    UnknownRecipe(RecipeId),
    UnknownCollection(CollectionId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyCollectionName => write!(f, "Collection name must not be empty"),
            StoreError::UnknownRecipe(id) => write!(f, "No recipe with id {:?}", id),
            StoreError::UnknownCollection(id) => write!(f, "No collection with id {:?}", id),
        }
    }
}

impl Error for StoreError {}

pub struct RecordStore {
    recipes: HashMap<RecipeId, Recipe>,
    ingredients: HashMap<IngredientId, Ingredient>,
    instructions: HashMap<InstructionId, Instruction>,
    nutrition: HashMap<NutritionId, Nutrition>,
    collections: HashMap<CollectionId, Collection>,
    memberships: HashSet<(CollectionId, RecipeId)>,
    next_recipe_id: RecipeId,
    next_ingredient_id: IngredientId,
    next_instruction_id: InstructionId,
    next_nutrition_id: NutritionId,
    next_collection_id: CollectionId,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            recipes: HashMap::new(),
            ingredients: HashMap::new(),
            instructions: HashMap::new(),
            nutrition: HashMap::new(),
            collections: HashMap::new(),
            memberships: HashSet::new(),
            next_recipe_id: RecipeId::INITIAL,
            next_ingredient_id: IngredientId::INITIAL,
            next_instruction_id: InstructionId::INITIAL,
            next_nutrition_id: NutritionId::INITIAL,
            next_collection_id: CollectionId::INITIAL,
        }
    }

    /// Inserts a recipe aggregate, assigning ids to the recipe and every
    /// child record. Child ordering fields are renormalized on the way in:
    /// ingredient `order` restarts at 0 and step numbers at 1, in input order.
    pub fn insert_recipe(&mut self, draft: NewRecipe) -> RecipeId {
        let recipe_id = self.next_recipe_id;
        self.next_recipe_id = recipe_id.next();

        self.recipes.insert(
            recipe_id,
            Recipe {
                id: recipe_id,
                title: draft.title,
                description: draft.description,
                cook_time: draft.cook_time,
                prep_time: draft.prep_time,
                servings: draft.servings,
                difficulty: draft.difficulty,
                cuisine: draft.cuisine,
                meal_type: draft.meal_type,
                source_type: draft.source_type,
            },
        );

        for (index, ingredient) in draft.ingredients.into_iter().enumerate() {
            let id = self.next_ingredient_id;
            self.next_ingredient_id = id.next();
            self.ingredients.insert(
                id,
                Ingredient {
                    id,
                    recipe_id,
                    item: ingredient.item,
                    quantity: ingredient.quantity,
                    unit: ingredient.unit,
                    section: ingredient.section,
                    order: index as u32,
                },
            );
        }

        for (index, instruction) in draft.instructions.into_iter().enumerate() {
            let id = self.next_instruction_id;
            self.next_instruction_id = id.next();
            self.instructions.insert(
                id,
                Instruction {
                    id,
                    recipe_id,
                    step_number: index as u32 + 1,
                    instruction: instruction.instruction,
                    time_minutes: instruction.time_minutes,
                    tip: instruction.tip,
                },
            );
        }

        if let Some(nutrition) = draft.nutrition {
            let id = self.next_nutrition_id;
            self.next_nutrition_id = id.next();
            self.nutrition.insert(
                id,
                Nutrition {
                    id,
                    recipe_id,
                    calories: nutrition.calories,
                    protein: nutrition.protein,
                    carbohydrates: nutrition.carbohydrates,
                    fat: nutrition.fat,
                    fiber: nutrition.fiber,
                    sugar: nutrition.sugar,
                },
            );
        }

        recipe_id
    }

    /// Reassembles a recipe with its children, ingredients ordered by `order`
    /// and instructions by `step_number`.
    pub fn recipe(&self, id: RecipeId) -> Option<RecipeAggregate> {
        let recipe = self.recipes.get(&id)?.clone();

        let mut ingredients: Vec<Ingredient> = self
            .ingredients
            .values()
            .filter(|ingredient| ingredient.recipe_id == id)
            .cloned()
            .collect();
        ingredients.sort_by_key(|ingredient| ingredient.order);

        let mut instructions: Vec<Instruction> = self
            .instructions
            .values()
            .filter(|instruction| instruction.recipe_id == id)
            .cloned()
            .collect();
        instructions.sort_by_key(|instruction| instruction.step_number);

        let nutrition = self
            .nutrition
            .values()
            .find(|nutrition| nutrition.recipe_id == id)
            .cloned();

        Some(RecipeAggregate {
            recipe,
            ingredients,
            instructions,
            nutrition,
        })
    }

    pub fn recipes(&self) -> Vec<RecipeAggregate> {
        let mut ids: Vec<RecipeId> = self.recipes.keys().copied().collect();
        ids.sort();
        ids.into_iter().filter_map(|id| self.recipe(id)).collect()
    }

    /// Deletes a recipe and cascades to its ingredients, instructions,
    /// nutrition, and collection membership edges. Returns false when the id
    /// is unknown.
    pub fn delete_recipe(&mut self, id: RecipeId) -> bool {
        if self.recipes.remove(&id).is_none() {
            return false;
        }
        self.ingredients
            .retain(|_, ingredient| ingredient.recipe_id != id);
        self.instructions
            .retain(|_, instruction| instruction.recipe_id != id);
        self.nutrition
            .retain(|_, nutrition| nutrition.recipe_id != id);
        self.memberships.retain(|(_, recipe_id)| *recipe_id != id);
        true
    }

    pub fn create_collection(
        &mut self,
        name: &str,
        description: Option<String>,
    ) -> Result<CollectionId, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyCollectionName);
        }
        let id = self.next_collection_id;
        self.next_collection_id = id.next();
        self.collections.insert(
            id,
            Collection {
                id,
                name: name.to_string(),
                description,
            },
        );
        Ok(id)
    }

    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(&id)
    }

    /// Removes a collection and its membership edges. Member recipes are left
    /// untouched.
    pub fn delete_collection(&mut self, id: CollectionId) -> bool {
        if self.collections.remove(&id).is_none() {
            return false;
        }
        self.memberships
            .retain(|(collection_id, _)| *collection_id != id);
        true
    }

    pub fn add_to_collection(
        &mut self,
        collection_id: CollectionId,
        recipe_id: RecipeId,
    ) -> Result<(), StoreError> {
        if !self.collections.contains_key(&collection_id) {
            return Err(StoreError::UnknownCollection(collection_id));
        }
        if !self.recipes.contains_key(&recipe_id) {
            return Err(StoreError::UnknownRecipe(recipe_id));
        }
        self.memberships.insert((collection_id, recipe_id));
        Ok(())
    }

    pub fn remove_from_collection(
        &mut self,
        collection_id: CollectionId,
        recipe_id: RecipeId,
    ) -> bool {
        self.memberships.remove(&(collection_id, recipe_id))
    }

    pub fn collection_recipes(&self, collection_id: CollectionId) -> Vec<RecipeAggregate> {
        let mut ids: Vec<RecipeId> = self
            .memberships
            .iter()
            .filter(|(membership_collection, _)| *membership_collection == collection_id)
            .map(|(_, recipe_id)| *recipe_id)
            .collect();
        ids.sort();
        ids.into_iter().filter_map(|id| self.recipe(id)).collect()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
