use catalog::{CatalogQueries, Dish};
use diet_planning::{
    current_diet_plan, generate_diet_plan, swap_dish, DietPlanningError, DietPlanQueries,
};
use sqlx::SqlitePool;
use user::{NutritionGoals, UserQueries};

async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::query(
        r#"
        CREATE TABLE users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            activity_level TEXT,
            fitness_level TEXT,
            primary_goal TEXT,
            dietary_type TEXT NOT NULL DEFAULT 'vegetarian',
            equipment_prefs TEXT NOT NULL DEFAULT '[]',
            target_calories INTEGER,
            target_protein INTEGER,
            target_carbs INTEGER,
            target_fats INTEGER,
            current_diet_plan TEXT,
            current_workout_plan TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create users table");

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
        CREATE TABLE diet_plans (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            target_calories INTEGER NOT NULL,
            target_protein INTEGER NOT NULL,
            target_carbs INTEGER NOT NULL,
            target_fats INTEGER NOT NULL,
            status TEXT NOT NULL DEFAULT 'active',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create diet_plans table");

    sqlx::query(
        r#"
        CREATE TABLE daily_meals (
            id TEXT PRIMARY KEY,
            diet_plan_id TEXT NOT NULL,
            day_index INTEGER NOT NULL,
            date TEXT NOT NULL,
            breakfast_dish_id TEXT NOT NULL,
            lunch_dish_id TEXT NOT NULL,
            dinner_dish_id TEXT NOT NULL,
            snack_dish_ids TEXT NOT NULL DEFAULT '[]',
            total_calories INTEGER NOT NULL,
            total_protein INTEGER NOT NULL,
            total_carbs INTEGER NOT NULL,
            total_fats INTEGER NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create daily_meals table");

    pool
}

fn test_dish(id: &str, category: &str, calories: i64, protein: i64) -> Dish {
    Dish {
        id: id.to_string(),
        name: format!("Dish {}", id),
        description: String::new(),
        category: category.to_string(),
        calories,
        protein,
        carbs: calories / 10,
        fats: protein / 2,
        fiber: 3,
        ingredients: "[]".to_string(),
        instructions: String::new(),
        prep_time_min: 5,
        cook_time_min: 10,
        servings: 1,
        dietary_type: "vegetarian".to_string(),
    }
}

async fn seed_minimal_catalog(pool: &SqlitePool) {
    for dish in [
        test_dish("b", "breakfast", 400, 38),
        test_dish("l", "lunch", 700, 52),
        test_dish("d", "dinner", 600, 38),
        test_dish("s", "snack", 300, 22),
    ] {
        CatalogQueries::insert_dish(&dish, pool)
            .await
            .expect("Failed to insert dish");
    }
}

async fn create_ready_user(pool: &SqlitePool, user_id: &str) {
    UserQueries::create_user(user_id, "testuser", "test@example.com", pool)
        .await
        .expect("Failed to create user");
    UserQueries::save_nutrition_goals(
        user_id,
        &NutritionGoals {
            target_calories: 2000,
            target_protein: 150,
            target_carbs: 220,
            target_fats: 60,
        },
        pool,
    )
    .await
    .expect("Failed to save goals");
}

#[tokio::test]
async fn generate_persists_plan_with_days() {
    let pool = setup_test_db().await;
    seed_minimal_catalog(&pool).await;
    create_ready_user(&pool, "user-1").await;

    let plan = generate_diet_plan("user-1", 7, Some(42), &pool)
        .await
        .expect("Generation failed");

    assert_eq!(plan.plan.status, "active");
    assert_eq!(plan.plan.target_calories, 2000);
    assert_eq!(plan.days.len(), 7);
    for (i, day) in plan.days.iter().enumerate() {
        assert_eq!(day.day_index, i as i64);
        assert_eq!(day.total_calories, 2000);
        assert_eq!(day.total_protein, 150);
    }

    let profile = UserQueries::require_profile("user-1", &pool)
        .await
        .expect("Profile lookup failed");
    assert_eq!(profile.current_diet_plan.as_deref(), Some(plan.plan.id.as_str()));
}

#[tokio::test]
async fn regeneration_supersedes_previous_plan() {
    let pool = setup_test_db().await;
    seed_minimal_catalog(&pool).await;
    create_ready_user(&pool, "user-1").await;

    let first = generate_diet_plan("user-1", 7, Some(1), &pool)
        .await
        .expect("First generation failed");
    let second = generate_diet_plan("user-1", 14, Some(2), &pool)
        .await
        .expect("Second generation failed");

    let first_again = DietPlanQueries::get_plan_by_id(&pool, &first.plan.id)
        .await
        .expect("Lookup failed")
        .expect("First plan vanished");
    assert_eq!(first_again.plan.status, "superseded");
    assert_eq!(first_again.days.len(), 7, "superseded days remain readable");

    let current = current_diet_plan("user-1", &pool)
        .await
        .expect("No current plan");
    assert_eq!(current.plan.id, second.plan.id);
    assert_eq!(current.days.len(), 14);

    let history = DietPlanQueries::plan_history(&pool, "user-1")
        .await
        .expect("History failed");
    assert_eq!(history.len(), 2);
    assert_eq!(
        history.iter().filter(|p| p.status == "active").count(),
        1,
        "exactly one active plan per user"
    );
}

#[tokio::test]
async fn generate_without_goals_persists_nothing() {
    let pool = setup_test_db().await;
    seed_minimal_catalog(&pool).await;
    UserQueries::create_user("user-1", "testuser", "test@example.com", &pool)
        .await
        .expect("Failed to create user");

    let err = generate_diet_plan("user-1", 7, None, &pool).await.unwrap_err();
    assert!(matches!(err, DietPlanningError::MissingNutritionGoals));

    let history = DietPlanQueries::plan_history(&pool, "user-1")
        .await
        .expect("History failed");
    assert!(history.is_empty());
}

#[tokio::test]
async fn generate_with_empty_catalog_fails() {
    let pool = setup_test_db().await;
    create_ready_user(&pool, "user-1").await;

    let err = generate_diet_plan("user-1", 7, None, &pool).await.unwrap_err();
    assert!(matches!(err, DietPlanningError::EmptyCatalog));
}

#[tokio::test]
async fn swap_rewrites_only_the_addressed_day() {
    let pool = setup_test_db().await;
    seed_minimal_catalog(&pool).await;
    create_ready_user(&pool, "user-1").await;
    CatalogQueries::insert_dish(&test_dish("l2", "lunch", 650, 45), &pool)
        .await
        .expect("Failed to insert dish");

    // Single candidate per original category, so day 1's lunch is "l".
    let plan = generate_diet_plan("user-1", 3, Some(7), &pool)
        .await
        .expect("Generation failed");
    let before: Vec<_> = plan.days.clone();

    let updated = swap_dish("user-1", 1, "lunch", "l", "l2", &pool)
        .await
        .expect("Swap failed");
    assert_eq!(updated.lunch_dish_id, "l2");
    assert_eq!(updated.total_calories, 400 + 650 + 600 + 300);
    assert_eq!(updated.total_protein, 38 + 45 + 38 + 22);

    let after = current_diet_plan("user-1", &pool)
        .await
        .expect("No current plan");
    assert_eq!(after.days[1].lunch_dish_id, "l2");
    assert_eq!(after.days[1].total_calories, updated.total_calories);
    for i in [0usize, 2] {
        assert_eq!(after.days[i].lunch_dish_id, before[i].lunch_dish_id);
        assert_eq!(after.days[i].total_calories, before[i].total_calories);
    }
}

#[tokio::test]
async fn swap_replaces_matching_snack_entry() {
    let pool = setup_test_db().await;
    seed_minimal_catalog(&pool).await;
    create_ready_user(&pool, "user-1").await;
    CatalogQueries::insert_dish(&test_dish("s2", "snack", 180, 15), &pool)
        .await
        .expect("Failed to insert dish");

    generate_diet_plan("user-1", 2, Some(7), &pool)
        .await
        .expect("Generation failed");

    let updated = swap_dish("user-1", 0, "snack", "s", "s2", &pool)
        .await
        .expect("Swap failed");
    assert_eq!(updated.snack_ids(), vec!["s2".to_string()]);
    assert_eq!(updated.total_calories, 400 + 700 + 600 + 180);
}

#[tokio::test]
async fn swap_error_cases() {
    let pool = setup_test_db().await;
    seed_minimal_catalog(&pool).await;
    create_ready_user(&pool, "user-1").await;

    // No plan yet.
    let err = swap_dish("user-1", 0, "lunch", "l", "l", &pool).await.unwrap_err();
    assert!(matches!(err, DietPlanningError::NoActivePlan));

    generate_diet_plan("user-1", 2, Some(7), &pool)
        .await
        .expect("Generation failed");

    let err = swap_dish("user-1", 5, "lunch", "l", "l", &pool).await.unwrap_err();
    assert!(matches!(
        err,
        DietPlanningError::InvalidDayIndex { index: 5, days: 2 }
    ));

    let err = swap_dish("user-1", 0, "brunch", "l", "l", &pool).await.unwrap_err();
    assert!(matches!(err, DietPlanningError::UnknownMealSlot(_)));

    let err = swap_dish("user-1", 0, "lunch", "l", "nope", &pool).await.unwrap_err();
    assert!(matches!(err, DietPlanningError::DishNotFound(_)));

    // Old id must occupy the slot.
    let err = swap_dish("user-1", 0, "lunch", "d", "l", &pool).await.unwrap_err();
    assert!(matches!(err, DietPlanningError::DishNotFound(_)));
}

#[tokio::test]
async fn vegetarian_plans_exclude_non_veg_dishes() {
    let pool = setup_test_db().await;
    seed_minimal_catalog(&pool).await;
    create_ready_user(&pool, "user-1").await;

    let mut chicken = test_dish("chicken-bowl", "lunch", 700, 55);
    chicken.dietary_type = "non-vegetarian".to_string();
    CatalogQueries::insert_dish(&chicken, &pool)
        .await
        .expect("Failed to insert dish");

    for _ in 0..5 {
        let plan = generate_diet_plan("user-1", 7, None, &pool)
            .await
            .expect("Generation failed");
        for day in &plan.days {
            assert_ne!(day.lunch_dish_id, "chicken-bowl");
        }
    }
}
