use crate::error::UserError;
use crate::types::NutritionGoals;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User profile row (users table).
///
/// Enumerated fields are stored as their string form and parsed by the
/// planning crates; optional fields stay unset until the user fills in
/// the corresponding part of their profile.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfileRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub activity_level: Option<String>,
    pub fitness_level: Option<String>,
    pub primary_goal: Option<String>,
    pub dietary_type: String,
    pub equipment_prefs: String, // JSON array of strings
    pub target_calories: Option<i64>,
    pub target_protein: Option<i64>,
    pub target_carbs: Option<i64>,
    pub target_fats: Option<i64>,
    pub current_diet_plan: Option<String>,
    pub current_workout_plan: Option<String>,
    pub created_at: String,
}

impl UserProfileRow {
    /// Stored macro targets, present only after the nutrition calculation
    /// has run. Diet plan generation treats `None` as a missing
    /// prerequisite.
    pub fn nutrition_goals(&self) -> Option<NutritionGoals> {
        Some(NutritionGoals {
            target_calories: self.target_calories.filter(|c| *c > 0)?,
            target_protein: self.target_protein.unwrap_or(0),
            target_carbs: self.target_carbs.unwrap_or(0),
            target_fats: self.target_fats.unwrap_or(0),
        })
    }

    pub fn equipment_preferences(&self) -> Vec<String> {
        serde_json::from_str(&self.equipment_prefs).unwrap_or_default()
    }
}

/// Query methods for the users table.
pub struct UserQueries;

impl UserQueries {
    pub async fn create_user(
        id: &str,
        username: &str,
        email: &str,
        pool: &SqlitePool,
    ) -> Result<(), UserError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, dietary_type, equipment_prefs, created_at)
            VALUES (?1, ?2, ?3, 'vegetarian', '[]', ?4)
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn get_profile(
        user_id: &str,
        pool: &SqlitePool,
    ) -> Result<Option<UserProfileRow>, UserError> {
        let row = sqlx::query_as::<_, UserProfileRow>(
            r#"
            SELECT id, username, email, activity_level, fitness_level, primary_goal,
                   dietary_type, equipment_prefs, target_calories, target_protein,
                   target_carbs, target_fats, current_diet_plan, current_workout_plan,
                   created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Profile lookup that fails with `UserNotFound` instead of `None`.
    pub async fn require_profile(
        user_id: &str,
        pool: &SqlitePool,
    ) -> Result<UserProfileRow, UserError> {
        Self::get_profile(user_id, pool)
            .await?
            .ok_or_else(|| UserError::UserNotFound(user_id.to_string()))
    }

    pub async fn save_nutrition_goals(
        user_id: &str,
        goals: &NutritionGoals,
        pool: &SqlitePool,
    ) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET target_calories = ?1, target_protein = ?2, target_carbs = ?3, target_fats = ?4
            WHERE id = ?5
            "#,
        )
        .bind(goals.target_calories)
        .bind(goals.target_protein)
        .bind(goals.target_carbs)
        .bind(goals.target_fats)
        .bind(user_id)
        .execute(pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound(user_id.to_string()));
        }
        Ok(())
    }

    pub async fn save_equipment_preferences(
        user_id: &str,
        prefs: &[String],
        pool: &SqlitePool,
    ) -> Result<(), UserError> {
        let prefs_json = serde_json::to_string(prefs).unwrap_or_else(|_| "[]".to_string());
        let result = sqlx::query("UPDATE users SET equipment_prefs = ?1 WHERE id = ?2")
            .bind(prefs_json)
            .bind(user_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound(user_id.to_string()));
        }
        Ok(())
    }

    pub async fn update_fitness_profile(
        user_id: &str,
        activity_level: Option<&str>,
        fitness_level: Option<&str>,
        primary_goal: Option<&str>,
        dietary_type: Option<&str>,
        pool: &SqlitePool,
    ) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET activity_level = COALESCE(?1, activity_level),
                fitness_level = COALESCE(?2, fitness_level),
                primary_goal = COALESCE(?3, primary_goal),
                dietary_type = COALESCE(?4, dietary_type)
            WHERE id = ?5
            "#,
        )
        .bind(activity_level)
        .bind(fitness_level)
        .bind(primary_goal)
        .bind(dietary_type)
        .bind(user_id)
        .execute(pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound(user_id.to_string()));
        }
        Ok(())
    }
}
