use crate::algorithm::{ExerciseEntry, GeneratedWorkoutPlan};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

pub const PLAN_STATUS_ACTIVE: &str = "active";
pub const PLAN_STATUS_SUPERSEDED: &str = "superseded";

/// Workout plan header row (workout_plans table). Progress counters live
/// on the header and are updated by workout completion.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutPlanRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub fitness_level: String,
    pub primary_goal: String,
    pub start_date: String,
    pub end_date: String,
    pub duration_days: i64,
    pub workouts_per_week: i64,
    pub status: String,
    pub workouts_completed: i64,
    pub calories_burned: i64,
    pub current_streak: i64,
    pub longest_streak: i64,
    pub created_at: String,
}

/// One day of a stored workout plan (daily_workouts table).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyWorkoutRow {
    pub id: String,
    pub workout_plan_id: String,
    pub day_index: i64,
    pub date: String,
    pub workout_type: String,
    pub exercises: String, // JSON array of exercise entries
    pub total_duration_min: i64,
    pub estimated_calories: i64,
    pub completed: bool,
    pub completed_at: Option<String>,
}

impl DailyWorkoutRow {
    pub fn exercise_entries(&self) -> Vec<ExerciseEntry> {
        serde_json::from_str(&self.exercises).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanWithDays {
    pub plan: WorkoutPlanRow,
    pub days: Vec<DailyWorkoutRow>,
}

/// Query helper for workout plan persistence.
pub struct WorkoutPlanQueries;

impl WorkoutPlanQueries {
    /// Persist a generated plan atomically, superseding the user's active
    /// plan and moving the current-plan pointer.
    pub async fn insert_generated(
        pool: &SqlitePool,
        user_id: &str,
        generated: &GeneratedWorkoutPlan,
    ) -> Result<String, sqlx::Error> {
        let plan_id = Uuid::new_v4().to_string();
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE workout_plans SET status = ? WHERE user_id = ? AND status = ?")
            .bind(PLAN_STATUS_SUPERSEDED)
            .bind(user_id)
            .bind(PLAN_STATUS_ACTIVE)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO workout_plans (
                id, user_id, name, fitness_level, primary_goal,
                start_date, end_date, duration_days, workouts_per_week,
                status, workouts_completed, calories_burned,
                current_streak, longest_streak, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, 0, 0, 0, datetime('now'))
            "#,
        )
        .bind(&plan_id)
        .bind(user_id)
        .bind(&generated.name)
        .bind(generated.fitness_level.as_str())
        .bind(generated.primary_goal.as_str())
        .bind(&generated.start_date)
        .bind(&generated.end_date)
        .bind(generated.duration_days as i64)
        .bind(generated.workouts_per_week as i64)
        .bind(PLAN_STATUS_ACTIVE)
        .execute(&mut *tx)
        .await?;

        for (day_index, day) in generated.daily_workouts.iter().enumerate() {
            let exercises_json =
                serde_json::to_string(&day.exercises).unwrap_or_else(|_| "[]".to_string());
            sqlx::query(
                r#"
                INSERT INTO daily_workouts (
                    id, workout_plan_id, day_index, date, workout_type,
                    exercises, total_duration_min, estimated_calories,
                    completed, completed_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, NULL)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&plan_id)
            .bind(day_index as i64)
            .bind(&day.date)
            .bind(&day.workout_type)
            .bind(exercises_json)
            .bind(day.total_duration_min)
            .bind(day.estimated_calories)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("UPDATE users SET current_workout_plan = ? WHERE id = ?")
            .bind(&plan_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(plan_id)
    }

    pub async fn get_current_plan(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Option<WorkoutPlanWithDays>, sqlx::Error> {
        let plan = sqlx::query_as::<_, WorkoutPlanRow>(
            r#"
            SELECT * FROM workout_plans
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
                Ok(Some(WorkoutPlanWithDays { plan, days }))
            }
            None => Ok(None),
        }
    }

    pub async fn get_plan_by_id(
        pool: &SqlitePool,
        plan_id: &str,
    ) -> Result<Option<WorkoutPlanWithDays>, sqlx::Error> {
        let plan = sqlx::query_as::<_, WorkoutPlanRow>("SELECT * FROM workout_plans WHERE id = ?")
            .bind(plan_id)
            .fetch_optional(pool)
            .await?;

        match plan {
            Some(plan) => {
                let days = Self::days_for_plan(pool, &plan.id).await?;
                Ok(Some(WorkoutPlanWithDays { plan, days }))
            }
            None => Ok(None),
        }
    }

    /// All plan headers for a user, newest first. Days are not loaded.
    pub async fn plan_history(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Vec<WorkoutPlanRow>, sqlx::Error> {
        sqlx::query_as::<_, WorkoutPlanRow>(
            "SELECT * FROM workout_plans WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn days_for_plan(
        pool: &SqlitePool,
        plan_id: &str,
    ) -> Result<Vec<DailyWorkoutRow>, sqlx::Error> {
        sqlx::query_as::<_, DailyWorkoutRow>(
            "SELECT * FROM daily_workouts WHERE workout_plan_id = ? ORDER BY day_index",
        )
        .bind(plan_id)
        .fetch_all(pool)
        .await
    }

    /// Mark one day completed and fold its calorie estimate into the
    /// plan's progress counters, in a single transaction. The streak
    /// update keeps the longest streak in step with the current one.
    pub async fn complete_day(
        pool: &SqlitePool,
        plan_id: &str,
        day: &DailyWorkoutRow,
        completed_at: &str,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE daily_workouts SET completed = 1, completed_at = ? WHERE id = ?")
            .bind(completed_at)
            .bind(&day.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            UPDATE workout_plans SET
                workouts_completed = workouts_completed + 1,
                calories_burned = calories_burned + ?,
                current_streak = current_streak + 1,
                longest_streak = MAX(longest_streak, current_streak + 1)
            WHERE id = ?
            "#,
        )
        .bind(day.estimated_calories)
        .bind(plan_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
