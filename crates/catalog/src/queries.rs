use crate::dish::{Dish, MealCategory};
use crate::exercise::{Difficulty, Exercise};
use sqlx::SqlitePool;

/// Query methods for the dish and exercise catalog tables.
///
/// The catalog is read-only reference data to plan generation; the only
/// writes here are the insert helpers used by seeding and tests.
pub struct CatalogQueries;

impl CatalogQueries {
    pub async fn dish_by_id(dish_id: &str, pool: &SqlitePool) -> Result<Option<Dish>, sqlx::Error> {
        sqlx::query_as::<_, Dish>(
            r#"
            SELECT id, name, description, category, calories, protein, carbs, fats, fiber,
                   ingredients, instructions, prep_time_min, cook_time_min, servings, dietary_type
            FROM dishes
            WHERE id = ?1
            "#,
        )
        .bind(dish_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn dishes_by_ids(ids: &[String], pool: &SqlitePool) -> Result<Vec<Dish>, sqlx::Error> {
        let mut dishes = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(dish) = Self::dish_by_id(id, pool).await? {
                dishes.push(dish);
            }
        }
        Ok(dishes)
    }

    pub async fn all_dishes(pool: &SqlitePool) -> Result<Vec<Dish>, sqlx::Error> {
        sqlx::query_as::<_, Dish>(
            r#"
            SELECT id, name, description, category, calories, protein, carbs, fats, fiber,
                   ingredients, instructions, prep_time_min, cook_time_min, servings, dietary_type
            FROM dishes
            ORDER BY category, name
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn dishes_by_category(
        category: MealCategory,
        pool: &SqlitePool,
    ) -> Result<Vec<Dish>, sqlx::Error> {
        sqlx::query_as::<_, Dish>(
            r#"
            SELECT id, name, description, category, calories, protein, carbs, fats, fiber,
                   ingredients, instructions, prep_time_min, cook_time_min, servings, dietary_type
            FROM dishes
            WHERE category = ?1
            ORDER BY name
            "#,
        )
        .bind(category.as_str())
        .fetch_all(pool)
        .await
    }

    pub async fn exercise_by_id(
        exercise_id: &str,
        pool: &SqlitePool,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, description, category, difficulty, equipment, muscle_groups,
                   duration_min, calories_per_min, is_active
            FROM exercises
            WHERE id = ?1
            "#,
        )
        .bind(exercise_id)
        .fetch_optional(pool)
        .await
    }

    /// Active exercises at an exact difficulty, ordered by name so repeated
    /// reads of an unchanged catalog return identical candidate sets.
    /// Category-set and equipment narrowing happen in the generator's
    /// candidate filter on top of this snapshot.
    pub async fn active_exercises_by_difficulty(
        difficulty: Difficulty,
        pool: &SqlitePool,
    ) -> Result<Vec<Exercise>, sqlx::Error> {
        sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, description, category, difficulty, equipment, muscle_groups,
                   duration_min, calories_per_min, is_active
            FROM exercises
            WHERE is_active = 1 AND difficulty = ?1
            ORDER BY name
            "#,
        )
        .bind(difficulty.as_str())
        .fetch_all(pool)
        .await
    }

    pub async fn insert_dish(dish: &Dish, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO dishes (id, name, description, category, calories, protein, carbs, fats,
                                fiber, ingredients, instructions, prep_time_min, cook_time_min,
                                servings, dietary_type)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
        )
        .bind(&dish.id)
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(&dish.category)
        .bind(dish.calories)
        .bind(dish.protein)
        .bind(dish.carbs)
        .bind(dish.fats)
        .bind(dish.fiber)
        .bind(&dish.ingredients)
        .bind(&dish.instructions)
        .bind(dish.prep_time_min)
        .bind(dish.cook_time_min)
        .bind(dish.servings)
        .bind(&dish.dietary_type)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn insert_exercise(exercise: &Exercise, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO exercises (id, name, description, category, difficulty, equipment,
                                   muscle_groups, duration_min, calories_per_min, is_active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&exercise.id)
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(&exercise.category)
        .bind(&exercise.difficulty)
        .bind(&exercise.equipment)
        .bind(&exercise.muscle_groups)
        .bind(exercise.duration_min)
        .bind(exercise.calories_per_min)
        .bind(exercise.is_active)
        .execute(pool)
        .await?;
        Ok(())
    }
}
