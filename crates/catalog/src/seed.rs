//! Starter catalog used by the `seed` CLI subcommand and by integration
//! tests that need a realistic dish/exercise pool.

use crate::dish::Dish;
use crate::exercise::Exercise;
use crate::queries::CatalogQueries;
use sqlx::SqlitePool;

fn dish(
    id: &str,
    name: &str,
    category: &str,
    calories: i64,
    protein: i64,
    carbs: i64,
    fats: i64,
    dietary_type: &str,
    ingredients: &[&str],
) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        calories,
        protein,
        carbs,
        fats,
        fiber: 0,
        ingredients: serde_json::to_string(ingredients).unwrap_or_else(|_| "[]".to_string()),
        instructions: String::new(),
        prep_time_min: 10,
        cook_time_min: 15,
        servings: 1,
        dietary_type: dietary_type.to_string(),
    }
}

fn exercise(
    id: &str,
    name: &str,
    category: &str,
    difficulty: &str,
    equipment: &str,
    duration_min: Option<i64>,
    calories_per_min: Option<i64>,
    muscles: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        equipment: equipment.to_string(),
        muscle_groups: serde_json::to_string(muscles).unwrap_or_else(|_| "[]".to_string()),
        duration_min,
        calories_per_min,
        is_active: true,
    }
}

pub fn starter_dishes() -> Vec<Dish> {
    vec![
        // Breakfast
        dish("dish-oat-porridge", "Oat Porridge with Berries", "breakfast", 320, 12, 54, 7, "vegetarian", &["rolled oats", "milk", "blueberries", "honey"]),
        dish("dish-masala-omelette", "Masala Omelette", "breakfast", 280, 19, 6, 20, "eggetarian", &["eggs", "onion", "tomato", "green chilli"]),
        dish("dish-tofu-scramble", "Tofu Scramble", "breakfast", 250, 18, 10, 15, "vegan", &["tofu", "turmeric", "spinach", "olive oil"]),
        dish("dish-chicken-sandwich", "Grilled Chicken Sandwich", "breakfast", 410, 32, 38, 13, "non-vegetarian", &["chicken breast", "whole-wheat bread", "lettuce"]),
        // Lunch
        dish("dish-rajma-rice", "Rajma with Brown Rice", "lunch", 560, 21, 92, 10, "vegetarian", &["kidney beans", "brown rice", "onion", "tomato"]),
        dish("dish-paneer-wrap", "Paneer Tikka Wrap", "lunch", 620, 28, 60, 28, "vegetarian", &["paneer", "tortilla", "yogurt", "capsicum"]),
        dish("dish-chicken-bowl", "Chicken Burrito Bowl", "lunch", 650, 45, 64, 20, "non-vegetarian", &["chicken thigh", "rice", "black beans", "salsa"]),
        dish("dish-chickpea-salad", "Chickpea Quinoa Salad", "lunch", 480, 19, 66, 14, "vegan", &["chickpeas", "quinoa", "cucumber", "lemon"]),
        // Dinner
        dish("dish-dal-roti", "Dal Tadka with Roti", "dinner", 520, 22, 78, 12, "vegetarian", &["toor dal", "whole-wheat flour", "ghee", "cumin"]),
        dish("dish-grilled-salmon", "Grilled Salmon with Vegetables", "dinner", 540, 42, 18, 32, "non-vegetarian", &["salmon", "broccoli", "carrot", "olive oil"]),
        dish("dish-veg-stirfry", "Tofu Vegetable Stir-fry", "dinner", 430, 24, 40, 18, "vegan", &["tofu", "bell pepper", "soy sauce", "noodles"]),
        dish("dish-egg-curry", "Egg Curry with Rice", "dinner", 580, 26, 70, 20, "eggetarian", &["eggs", "rice", "coconut milk", "curry paste"]),
        // Snacks
        dish("dish-greek-yogurt", "Greek Yogurt with Almonds", "snack", 220, 17, 14, 10, "vegetarian", &["greek yogurt", "almonds", "honey"]),
        dish("dish-roasted-chana", "Roasted Chana", "snack", 180, 10, 28, 3, "vegan", &["chickpeas", "chaat masala"]),
        dish("dish-protein-shake", "Whey Protein Shake", "snack", 240, 30, 18, 4, "vegetarian", &["whey protein", "milk", "banana"]),
        dish("dish-chicken-skewers", "Chicken Skewers", "snack", 260, 28, 4, 14, "non-vegetarian", &["chicken breast", "yogurt", "spices"]),
    ]
}

pub fn starter_exercises() -> Vec<Exercise> {
    vec![
        exercise("ex-pushup", "Push-up", "strength", "beginner", "bodyweight", Some(10), Some(7), &["chest", "triceps"]),
        exercise("ex-goblet-squat", "Goblet Squat", "strength", "beginner", "dumbbells", Some(12), Some(6), &["quads", "glutes"]),
        exercise("ex-bench-press", "Barbell Bench Press", "strength", "intermediate", "machine", Some(15), Some(6), &["chest", "shoulders"]),
        exercise("ex-deadlift", "Deadlift", "strength", "advanced", "machine", Some(15), Some(8), &["back", "hamstrings"]),
        exercise("ex-band-row", "Resistance Band Row", "strength", "intermediate", "resistance-bands", Some(12), Some(5), &["back", "biceps"]),
        exercise("ex-brisk-walk", "Brisk Walking", "cardio", "beginner", "none", Some(30), Some(5), &["legs"]),
        exercise("ex-jogging", "Jogging", "cardio", "intermediate", "none", Some(30), Some(9), &["legs"]),
        exercise("ex-interval-run", "Interval Running", "cardio", "advanced", "none", Some(25), Some(12), &["legs"]),
        exercise("ex-burpees", "Burpees", "hiit", "intermediate", "bodyweight", Some(15), Some(12), &["full body"]),
        exercise("ex-jump-squats", "Jump Squats", "hiit", "beginner", "bodyweight", Some(10), Some(10), &["quads", "glutes"]),
        exercise("ex-mountain-climbers", "Mountain Climbers", "hiit", "advanced", "bodyweight", Some(12), Some(11), &["core", "shoulders"]),
        exercise("ex-hamstring-stretch", "Hamstring Stretch", "flexibility", "beginner", "none", Some(10), Some(2), &["hamstrings"]),
        exercise("ex-sun-salutation", "Sun Salutation", "yoga", "beginner", "none", Some(15), Some(3), &["full body"]),
        exercise("ex-pilates-core", "Pilates Hundred", "pilates", "intermediate", "none", Some(10), Some(4), &["core"]),
        exercise("ex-football-drills", "Football Drills", "sports", "intermediate", "none", Some(40), Some(8), &["legs", "core"]),
    ]
}

/// Insert the starter catalog. Callers run this once against an empty
/// database; duplicate ids fail the insert rather than upserting.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<(usize, usize), sqlx::Error> {
    let dishes = starter_dishes();
    for dish in &dishes {
        CatalogQueries::insert_dish(dish, pool).await?;
    }
    let exercises = starter_exercises();
    for exercise in &exercises {
        CatalogQueries::insert_exercise(exercise, pool).await?;
    }
    Ok((dishes.len(), exercises.len()))
}
