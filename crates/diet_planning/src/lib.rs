pub mod algorithm;
pub mod allocator;
pub mod error;
pub mod filter;
pub mod read_model;
pub mod targets;

pub use algorithm::{DailyMealPlan, DietPlanAlgorithm, GeneratedDietPlan, MacroTotals};
pub use error::DietPlanningError;
pub use read_model::{DailyMealRow, DietPlanQueries, DietPlanRow, DietPlanWithDays};
pub use targets::{DayTargets, MealTargets, MEAL_DISTRIBUTION};

use catalog::{CatalogQueries, DietaryType, Dish, MealCategory};
use chrono::Utc;
use sqlx::SqlitePool;
use user::UserQueries;

/// Generate and persist a diet plan for a user.
///
/// Requires stored nutrition goals; the previous active plan (if any) is
/// superseded in the same transaction that stores the new one. Returns
/// the persisted plan with its days.
pub async fn generate_diet_plan(
    user_id: &str,
    duration_days: u32,
    seed: Option<u64>,
    pool: &SqlitePool,
) -> Result<DietPlanWithDays, DietPlanningError> {
    let profile = UserQueries::require_profile(user_id, pool).await?;
    let goals = profile
        .nutrition_goals()
        .ok_or(DietPlanningError::MissingNutritionGoals)?;
    let dietary = DietaryType::parse(&profile.dietary_type);

    let dishes = CatalogQueries::all_dishes(pool).await?;
    let start_date = Utc::now().date_naive();
    let generated =
        DietPlanAlgorithm::generate(start_date, duration_days, &goals, dietary, &dishes, seed)?;

    let plan_id = DietPlanQueries::insert_generated(pool, user_id, &generated).await?;
    DietPlanQueries::get_plan_by_id(pool, &plan_id)
        .await?
        .ok_or(DietPlanningError::PlanNotFound(plan_id))
}

/// The user's active diet plan, or `NoActivePlan`.
pub async fn current_diet_plan(
    user_id: &str,
    pool: &SqlitePool,
) -> Result<DietPlanWithDays, DietPlanningError> {
    DietPlanQueries::get_current_plan(pool, user_id)
        .await?
        .ok_or(DietPlanningError::NoActivePlan)
}

/// Replace one dish in one day of the user's active plan.
///
/// `slot` names the meal the dish sits in; for snacks the first entry
/// matching `old_dish_id` is replaced. The day's totals are recomputed
/// from the catalog and only the addressed day row is written.
pub async fn swap_dish(
    user_id: &str,
    day_index: usize,
    slot: &str,
    old_dish_id: &str,
    new_dish_id: &str,
    pool: &SqlitePool,
) -> Result<DailyMealRow, DietPlanningError> {
    let slot = MealCategory::parse(slot)
        .ok_or_else(|| DietPlanningError::UnknownMealSlot(slot.to_string()))?;

    let current = current_diet_plan(user_id, pool).await?;
    let days = current.days.len();
    let mut day = current
        .days
        .into_iter()
        .find(|d| d.day_index == day_index as i64)
        .ok_or(DietPlanningError::InvalidDayIndex {
            index: day_index,
            days,
        })?;

    let new_dish = CatalogQueries::dish_by_id(new_dish_id, pool)
        .await?
        .ok_or_else(|| DietPlanningError::DishNotFound(new_dish_id.to_string()))?;

    match slot {
        MealCategory::Breakfast | MealCategory::Lunch | MealCategory::Dinner => {
            let slot_ref = match slot {
                MealCategory::Breakfast => &mut day.breakfast_dish_id,
                MealCategory::Lunch => &mut day.lunch_dish_id,
                _ => &mut day.dinner_dish_id,
            };
            if *slot_ref != old_dish_id {
                return Err(DietPlanningError::DishNotFound(old_dish_id.to_string()));
            }
            *slot_ref = new_dish.id.clone();
        }
        MealCategory::Snack => {
            let mut snacks = day.snack_ids();
            let position = snacks
                .iter()
                .position(|id| id == old_dish_id)
                .ok_or_else(|| DietPlanningError::DishNotFound(old_dish_id.to_string()))?;
            snacks[position] = new_dish.id.clone();
            day.snack_dish_ids =
                serde_json::to_string(&snacks).unwrap_or_else(|_| "[]".to_string());
        }
    }

    let totals = day_totals(&day, pool).await?;
    day.total_calories = totals.calories;
    day.total_protein = totals.protein;
    day.total_carbs = totals.carbs;
    day.total_fats = totals.fats;

    DietPlanQueries::update_day(pool, &day).await?;
    Ok(day)
}

/// Recompute a day's macro totals from the catalog rows it references.
async fn day_totals(day: &DailyMealRow, pool: &SqlitePool) -> Result<MacroTotals, DietPlanningError> {
    let mut ids = vec![
        day.breakfast_dish_id.clone(),
        day.lunch_dish_id.clone(),
        day.dinner_dish_id.clone(),
    ];
    ids.extend(day.snack_ids());

    let mut dishes: Vec<Dish> = Vec::with_capacity(ids.len());
    for id in &ids {
        let dish = CatalogQueries::dish_by_id(id, pool)
            .await?
            .ok_or_else(|| DietPlanningError::DishNotFound(id.clone()))?;
        dishes.push(dish);
    }
    Ok(algorithm::sum_macros(dishes.iter()))
}
