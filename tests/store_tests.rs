use recipe_gen::records::{
    Difficulty, NewIngredient, NewInstruction, NewNutrition, NewRecipe, SourceType,
};
use recipe_gen::store::{RecordStore, StoreError};

fn draft(title: &str) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        description: None,
        cook_time: 20,
        prep_time: 10,
        servings: 2,
        difficulty: Difficulty::Medium,
        cuisine: None,
        meal_type: None,
        source_type: SourceType::AiGenerated,
        ingredients: vec![
            NewIngredient {
                item: "onion".to_string(),
                quantity: Some(1.0),
                unit: None,
                section: None,
                order: 0,
            },
            NewIngredient {
                item: "garlic".to_string(),
                quantity: None,
                unit: None,
                section: None,
                order: 1,
            },
        ],
        instructions: vec![
            NewInstruction {
                step_number: 1,
                instruction: "Chop".to_string(),
                time_minutes: None,
                tip: None,
            },
            NewInstruction {
                step_number: 2,
                instruction: "Fry".to_string(),
                time_minutes: Some(5),
                tip: None,
            },
        ],
        nutrition: Some(NewNutrition {
            calories: 120.0,
            protein: 3.0,
            carbohydrates: 15.0,
            fat: 5.0,
            fiber: None,
            sugar: None,
        }),
    }
}

#[test]
fn insert_and_fetch_aggregate() {
    let mut store = RecordStore::new();
    let id = store.insert_recipe(draft("Soffritto"));

    let aggregate = store.recipe(id).unwrap();
    assert_eq!(aggregate.recipe.title, "Soffritto");
    assert_eq!(aggregate.recipe.total_time(), 30);
    assert_eq!(aggregate.ingredients.len(), 2);
    assert_eq!(aggregate.ingredients[0].item, "onion");
    assert_eq!(aggregate.ingredients[0].recipe_id, id);
    assert_eq!(aggregate.instructions[1].instruction, "Fry");
    assert_eq!(aggregate.nutrition.as_ref().unwrap().calories, 120.0);
}

#[test]
fn insert_renormalizes_child_ordering() {
    let mut store = RecordStore::new();
    let mut recipe = draft("Out of order");
    recipe.ingredients[0].order = 7;
    recipe.ingredients[1].order = 3;
    recipe.instructions[0].step_number = 9;
    recipe.instructions[1].step_number = 4;

    let id = store.insert_recipe(recipe);
    let aggregate = store.recipe(id).unwrap();
    // input order wins; the stored fields restart at 0 and 1 respectively
    assert_eq!(aggregate.ingredients[0].item, "onion");
    assert_eq!(aggregate.ingredients[0].order, 0);
    assert_eq!(aggregate.ingredients[1].order, 1);
    assert_eq!(aggregate.instructions[0].instruction, "Chop");
    assert_eq!(aggregate.instructions[0].step_number, 1);
    assert_eq!(aggregate.instructions[1].step_number, 2);
}

#[test]
fn delete_recipe_cascades_to_children_and_memberships() {
    let mut store = RecordStore::new();
    let keep = store.insert_recipe(draft("Keeper"));
    let doomed = store.insert_recipe(draft("Doomed"));

    let collection = store.create_collection("Weeknight", None).unwrap();
    store.add_to_collection(collection, keep).unwrap();
    store.add_to_collection(collection, doomed).unwrap();

    assert!(store.delete_recipe(doomed));
    assert!(store.recipe(doomed).is_none());
    // the edge went with the recipe, the other member is untouched
    let members = store.collection_recipes(collection);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].recipe.id, keep);

    // the survivor keeps its children
    let keeper = store.recipe(keep).unwrap();
    assert_eq!(keeper.ingredients.len(), 2);
    assert!(keeper.nutrition.is_some());

    assert!(!store.delete_recipe(doomed));
}

#[test]
fn delete_collection_keeps_recipes() {
    let mut store = RecordStore::new();
    let recipe = store.insert_recipe(draft("Survivor"));
    let collection = store.create_collection("Favorites", None).unwrap();
    store.add_to_collection(collection, recipe).unwrap();

    assert!(store.delete_collection(collection));
    assert!(store.collection(collection).is_none());
    assert!(store.recipe(recipe).is_some());
    assert!(store.collection_recipes(collection).is_empty());
}

#[test]
fn collection_name_must_not_be_empty() {
    let mut store = RecordStore::new();
    assert_eq!(
        store.create_collection("   ", None),
        Err(StoreError::EmptyCollectionName)
    );
}

#[test]
fn membership_requires_both_sides_to_exist() {
    let mut store = RecordStore::new();
    let recipe = store.insert_recipe(draft("Lonely"));
    let collection = store.create_collection("Shelf", None).unwrap();

    let stale_recipe = store.insert_recipe(draft("Gone"));
    store.delete_recipe(stale_recipe);
    assert!(matches!(
        store.add_to_collection(collection, stale_recipe),
        Err(StoreError::UnknownRecipe(_))
    ));

    let stale_collection = store.create_collection("Gone", None).unwrap();
    store.delete_collection(stale_collection);
    assert!(matches!(
        store.add_to_collection(stale_collection, recipe),
        Err(StoreError::UnknownCollection(_))
    ));
}

#[test]
fn remove_from_collection_only_removes_the_edge() {
    let mut store = RecordStore::new();
    let recipe = store.insert_recipe(draft("Edge case"));
    let collection = store.create_collection("Shelf", None).unwrap();
    store.add_to_collection(collection, recipe).unwrap();

    assert!(store.remove_from_collection(collection, recipe));
    assert!(!store.remove_from_collection(collection, recipe));
    assert!(store.recipe(recipe).is_some());
    assert!(store.collection(collection).is_some());
}

#[test]
fn recipes_listing_is_ordered_by_id() {
    let mut store = RecordStore::new();
    let first = store.insert_recipe(draft("First"));
    let second = store.insert_recipe(draft("Second"));
    assert_ne!(first, second);

    let all = store.recipes();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].recipe.title, "First");
    assert_eq!(all[1].recipe.title, "Second");
}
