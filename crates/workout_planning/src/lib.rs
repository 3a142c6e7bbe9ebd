pub mod algorithm;
pub mod error;
pub mod filter;
pub mod prescription;
pub mod read_model;

pub use algorithm::{
    DailyWorkout, ExerciseEntry, GeneratedWorkoutPlan, WorkoutPlanAlgorithm,
    DEFAULT_REST_SEC, FALLBACK_DURATION_MIN, FALLBACK_KCAL_PER_MIN,
};
pub use error::WorkoutPlanningError;
pub use prescription::{
    derive_fitness_level, derive_goal, workout_type_for_day, Prescription, PrimaryGoal,
    WorkoutType,
};
pub use read_model::{
    DailyWorkoutRow, WorkoutPlanQueries, WorkoutPlanRow, WorkoutPlanWithDays,
};

use catalog::{CatalogQueries, Difficulty};
use chrono::Utc;
use filter::eligible_exercises;
use sqlx::SqlitePool;
use user::{ActivityLevel, UserQueries};

/// Generate and persist a workout plan for a user.
///
/// Level and goal default from the stored profile when not given; the
/// previous active plan is superseded in the same transaction that stores
/// the new one.
pub async fn generate_workout_plan(
    user_id: &str,
    duration_days: u32,
    workouts_per_week: u32,
    level: Option<Difficulty>,
    goal: Option<PrimaryGoal>,
    seed: Option<u64>,
    pool: &SqlitePool,
) -> Result<WorkoutPlanWithDays, WorkoutPlanningError> {
    let profile = UserQueries::require_profile(user_id, pool).await?;

    let activity = profile
        .activity_level
        .as_deref()
        .and_then(ActivityLevel::parse);
    let level = derive_fitness_level(
        level.or_else(|| profile.fitness_level.as_deref().and_then(Difficulty::parse)),
        activity,
    );
    let goal = derive_goal(goal, profile.primary_goal.as_deref());

    let snapshot = CatalogQueries::active_exercises_by_difficulty(level, pool).await?;
    let candidates = eligible_exercises(
        &snapshot,
        goal.category_set(),
        &profile.equipment_preferences(),
    );

    let start_date = Utc::now().date_naive();
    let generated = WorkoutPlanAlgorithm::generate(
        start_date,
        duration_days,
        workouts_per_week,
        level,
        goal,
        &candidates,
        seed,
    )?;

    let plan_id = WorkoutPlanQueries::insert_generated(pool, user_id, &generated).await?;
    WorkoutPlanQueries::get_plan_by_id(pool, &plan_id)
        .await?
        .ok_or(WorkoutPlanningError::PlanNotFound(plan_id))
}

/// The user's active workout plan, or `NoActivePlan`.
pub async fn current_workout_plan(
    user_id: &str,
    pool: &SqlitePool,
) -> Result<WorkoutPlanWithDays, WorkoutPlanningError> {
    WorkoutPlanQueries::get_current_plan(pool, user_id)
        .await?
        .ok_or(WorkoutPlanningError::NoActivePlan)
}

/// Mark one day of the user's active plan completed and update the plan's
/// progress counters. Returns the refreshed plan.
pub async fn complete_workout(
    user_id: &str,
    day_index: usize,
    pool: &SqlitePool,
) -> Result<WorkoutPlanWithDays, WorkoutPlanningError> {
    let current = current_workout_plan(user_id, pool).await?;
    let days = current.days.len();
    let day = current
        .days
        .iter()
        .find(|d| d.day_index == day_index as i64)
        .ok_or(WorkoutPlanningError::InvalidDayIndex {
            index: day_index,
            days,
        })?;

    let completed_at = Utc::now().to_rfc3339();
    WorkoutPlanQueries::complete_day(pool, &current.plan.id, day, &completed_at).await?;

    WorkoutPlanQueries::get_plan_by_id(pool, &current.plan.id)
        .await?
        .ok_or(WorkoutPlanningError::PlanNotFound(current.plan.id.clone()))
}
