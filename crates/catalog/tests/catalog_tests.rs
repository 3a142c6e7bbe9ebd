use catalog::{seed_catalog, CatalogQueries, Difficulty, MealCategory};
use sqlx::SqlitePool;

async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::query(
        r#"
        CREATE TABLE dishes (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL,
            calories INTEGER NOT NULL,
            protein INTEGER NOT NULL,
            carbs INTEGER NOT NULL,
            fats INTEGER NOT NULL,
            fiber INTEGER NOT NULL DEFAULT 0,
            ingredients TEXT NOT NULL DEFAULT '[]',
            instructions TEXT NOT NULL DEFAULT '',
            prep_time_min INTEGER NOT NULL DEFAULT 0,
            cook_time_min INTEGER NOT NULL DEFAULT 0,
            servings INTEGER NOT NULL DEFAULT 1,
            dietary_type TEXT NOT NULL DEFAULT 'vegetarian'
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create dishes table");

    sqlx::query(
        r#"
        CREATE TABLE exercises (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL,
            difficulty TEXT NOT NULL,
            equipment TEXT NOT NULL DEFAULT 'bodyweight',
            muscle_groups TEXT NOT NULL DEFAULT '[]',
            duration_min INTEGER,
            calories_per_min INTEGER,
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create exercises table");

    pool
}

#[tokio::test]
async fn seed_then_query_round_trip() {
    let pool = setup_test_db().await;
    let (dishes, exercises) = seed_catalog(&pool).await.expect("Seeding failed");
    assert!(dishes >= 16);
    assert!(exercises >= 15);

    let all = CatalogQueries::all_dishes(&pool).await.expect("Query failed");
    assert_eq!(all.len(), dishes);

    for category in MealCategory::ALL {
        let in_category = CatalogQueries::dishes_by_category(category, &pool)
            .await
            .expect("Query failed");
        assert!(!in_category.is_empty(), "no dishes for {}", category.as_str());
        for dish in &in_category {
            assert_eq!(dish.category, category.as_str());
        }
    }
}

#[tokio::test]
async fn dish_lookup_by_id() {
    let pool = setup_test_db().await;
    seed_catalog(&pool).await.expect("Seeding failed");

    let dish = CatalogQueries::dish_by_id("dish-oat-porridge", &pool)
        .await
        .expect("Query failed")
        .expect("Seeded dish missing");
    assert_eq!(dish.meal_category(), Some(MealCategory::Breakfast));
    assert!(!dish.ingredient_list().is_empty());

    let missing = CatalogQueries::dish_by_id("no-such-dish", &pool)
        .await
        .expect("Query failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn exercise_query_filters_active_and_difficulty() {
    let pool = setup_test_db().await;
    seed_catalog(&pool).await.expect("Seeding failed");

    sqlx::query("UPDATE exercises SET is_active = 0 WHERE difficulty = 'beginner'")
        .execute(&pool)
        .await
        .expect("Update failed");

    let beginners = CatalogQueries::active_exercises_by_difficulty(Difficulty::Beginner, &pool)
        .await
        .expect("Query failed");
    assert!(beginners.is_empty());

    let intermediates =
        CatalogQueries::active_exercises_by_difficulty(Difficulty::Intermediate, &pool)
            .await
            .expect("Query failed");
    assert!(!intermediates.is_empty());
    for exercise in &intermediates {
        assert_eq!(exercise.difficulty, "intermediate");
        assert!(exercise.is_active);
    }
}
