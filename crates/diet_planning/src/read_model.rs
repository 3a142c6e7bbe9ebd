use crate::algorithm::GeneratedDietPlan;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

pub const PLAN_STATUS_ACTIVE: &str = "active";
pub const PLAN_STATUS_SUPERSEDED: &str = "superseded";

/// Diet plan header row (diet_plans table).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DietPlanRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub target_calories: i64,
    pub target_protein: i64,
    pub target_carbs: i64,
    pub target_fats: i64,
    pub status: String,
    pub created_at: String,
}

/// One day of a stored diet plan (daily_meals table).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyMealRow {
    pub id: String,
    pub diet_plan_id: String,
    pub day_index: i64,
    pub date: String,
    pub breakfast_dish_id: String,
    pub lunch_dish_id: String,
    pub dinner_dish_id: String,
    pub snack_dish_ids: String, // JSON array of dish ids
    pub total_calories: i64,
    pub total_protein: i64,
    pub total_carbs: i64,
    pub total_fats: i64,
}

impl DailyMealRow {
    pub fn snack_ids(&self) -> Vec<String> {
        serde_json::from_str(&self.snack_dish_ids).unwrap_or_default()
    }
}

/// A plan header together with its days, ordered by day index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlanWithDays {
    pub plan: DietPlanRow,
    pub days: Vec<DailyMealRow>,
}

/// Query helper for diet plan persistence.
pub struct DietPlanQueries;

impl DietPlanQueries {
    /// Persist a generated plan atomically: supersede any active plan for
    /// the user, insert the new header and days, and point the user's
    /// current_diet_plan at the new id.
    pub async fn insert_generated(
        pool: &SqlitePool,
        user_id: &str,
        generated: &GeneratedDietPlan,
    ) -> Result<String, sqlx::Error> {
        let plan_id = Uuid::new_v4().to_string();
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE diet_plans SET status = ? WHERE user_id = ? AND status = ?")
            .bind(PLAN_STATUS_SUPERSEDED)
            .bind(user_id)
            .bind(PLAN_STATUS_ACTIVE)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO diet_plans (
                id, user_id, name, start_date, end_date,
                target_calories, target_protein, target_carbs, target_fats,
                status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, datetime('now'))
            "#,
        )
        .bind(&plan_id)
        .bind(user_id)
        .bind(&generated.name)
        .bind(&generated.start_date)
        .bind(&generated.end_date)
        .bind(generated.targets.target_calories)
        .bind(generated.targets.target_protein)
        .bind(generated.targets.target_carbs)
        .bind(generated.targets.target_fats)
        .bind(PLAN_STATUS_ACTIVE)
        .execute(&mut *tx)
        .await?;

        for (day_index, day) in generated.daily_plans.iter().enumerate() {
            let snack_json = serde_json::to_string(&day.snack_dish_ids)
                .unwrap_or_else(|_| "[]".to_string());
            sqlx::query(
                r#"
                INSERT INTO daily_meals (
                    id, diet_plan_id, day_index, date,
                    breakfast_dish_id, lunch_dish_id, dinner_dish_id, snack_dish_ids,
                    total_calories, total_protein, total_carbs, total_fats
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&plan_id)
            .bind(day_index as i64)
            .bind(&day.date)
            .bind(&day.breakfast_dish_id)
            .bind(&day.lunch_dish_id)
            .bind(&day.dinner_dish_id)
            .bind(snack_json)
            .bind(day.total_calories)
            .bind(day.total_protein)
            .bind(day.total_carbs)
            .bind(day.total_fats)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("UPDATE users SET current_diet_plan = ? WHERE id = ?")
            .bind(&plan_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(plan_id)
    }

    /// The user's active plan with its days, if any.
    pub async fn get_current_plan(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Option<DietPlanWithDays>, sqlx::Error> {
        let plan = sqlx::query_as::<_, DietPlanRow>(
            r#"
            SELECT * FROM diet_plans
            WHERE user_id = ? AND status = ?
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(PLAN_STATUS_ACTIVE)
        .fetch_optional(pool)
        .await?;

        match plan {
            Some(plan) => {
                let days = Self::days_for_plan(pool, &plan.id).await?;
                Ok(Some(DietPlanWithDays { plan, days }))
            }
            None => Ok(None),
        }
    }

    pub async fn get_plan_by_id(
        pool: &SqlitePool,
        plan_id: &str,
    ) -> Result<Option<DietPlanWithDays>, sqlx::Error> {
        let plan = sqlx::query_as::<_, DietPlanRow>("SELECT * FROM diet_plans WHERE id = ?")
            .bind(plan_id)
            .fetch_optional(pool)
            .await?;

        match plan {
            Some(plan) => {
                let days = Self::days_for_plan(pool, &plan.id).await?;
                Ok(Some(DietPlanWithDays { plan, days }))
            }
            None => Ok(None),
        }
    }

    /// All plan headers for a user, newest first. Days are not loaded.
    pub async fn plan_history(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Vec<DietPlanRow>, sqlx::Error> {
        sqlx::query_as::<_, DietPlanRow>(
            "SELECT * FROM diet_plans WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn days_for_plan(
        pool: &SqlitePool,
        plan_id: &str,
    ) -> Result<Vec<DailyMealRow>, sqlx::Error> {
        sqlx::query_as::<_, DailyMealRow>(
            "SELECT * FROM daily_meals WHERE diet_plan_id = ? ORDER BY day_index",
        )
        .bind(plan_id)
        .fetch_all(pool)
        .await
    }

    pub async fn get_day(
        pool: &SqlitePool,
        plan_id: &str,
        day_index: i64,
    ) -> Result<Option<DailyMealRow>, sqlx::Error> {
        sqlx::query_as::<_, DailyMealRow>(
            "SELECT * FROM daily_meals WHERE diet_plan_id = ? AND day_index = ?",
        )
        .bind(plan_id)
        .bind(day_index)
        .fetch_optional(pool)
        .await
    }

    /// Rewrite one day's dish references and totals. Touches only the
    /// addressed row; sibling days are untouched.
    pub async fn update_day(pool: &SqlitePool, day: &DailyMealRow) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE daily_meals SET
                breakfast_dish_id = ?,
                lunch_dish_id = ?,
                dinner_dish_id = ?,
                snack_dish_ids = ?,
                total_calories = ?,
                total_protein = ?,
                total_carbs = ?,
                total_fats = ?
            WHERE id = ?
            "#,
        )
        .bind(&day.breakfast_dish_id)
        .bind(&day.lunch_dish_id)
        .bind(&day.dinner_dish_id)
        .bind(&day.snack_dish_ids)
        .bind(day.total_calories)
        .bind(day.total_protein)
        .bind(day.total_carbs)
        .bind(day.total_fats)
        .bind(&day.id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
