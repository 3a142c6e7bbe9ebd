use crate::allocator::select_dish_for_target;
use crate::error::DietPlanningError;
use crate::filter::eligible_dishes;
use crate::targets::DayTargets;
use catalog::{DietaryType, Dish, MealCategory};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use user::NutritionGoals;

/// Exact integer macro sums over a set of dishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
}

pub fn sum_macros<'a>(dishes: impl IntoIterator<Item = &'a Dish>) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for dish in dishes {
        totals.calories += dish.calories;
        totals.protein += dish.protein;
        totals.carbs += dish.carbs;
        totals.fats += dish.fats;
    }
    totals
}

/// One day's chosen dishes plus the day's aggregated totals.
///
/// Invariant: the totals always equal the macro sums of the referenced
/// dishes; anything that mutates the dish set recomputes them in the
/// same step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMealPlan {
    pub date: String, // %Y-%m-%d
    pub breakfast_dish_id: String,
    pub lunch_dish_id: String,
    pub dinner_dish_id: String,
    pub snack_dish_ids: Vec<String>,
    pub total_calories: i64,
    pub total_protein: i64,
    pub total_carbs: i64,
    pub total_fats: i64,
}

/// A generated diet plan before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDietPlan {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub targets: NutritionGoals,
    pub daily_plans: Vec<DailyMealPlan>,
}

/// Diet plan generation: derive per-slot targets, filter candidates per
/// slot, allocate with the randomized nearest-match search, aggregate
/// exact totals.
pub struct DietPlanAlgorithm;

impl DietPlanAlgorithm {
    /// Generate a `duration_days`-day plan from a catalog snapshot.
    ///
    /// `seed` makes the randomized search reproducible; without one the
    /// RNG is seeded from the clock.
    pub fn generate(
        start_date: NaiveDate,
        duration_days: u32,
        goals: &NutritionGoals,
        dietary: DietaryType,
        dishes: &[Dish],
        seed: Option<u64>,
    ) -> Result<GeneratedDietPlan, DietPlanningError> {
        if dishes.is_empty() {
            return Err(DietPlanningError::EmptyCatalog);
        }

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                use std::time::{SystemTime, UNIX_EPOCH};
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                StdRng::seed_from_u64(now)
            }
        };

        let targets = DayTargets::derive(goals);
        let duration_days = duration_days.max(1);
        let end_date = start_date + chrono::Duration::days(duration_days as i64 - 1);

        let mut daily_plans = Vec::with_capacity(duration_days as usize);
        for day_offset in 0..duration_days {
            let date = start_date + chrono::Duration::days(day_offset as i64);

            let mut chosen: Vec<&Dish> = Vec::with_capacity(4);
            for category in MealCategory::ALL {
                let candidates = eligible_dishes(dishes, category, dietary);
                let dish = select_dish_for_target(
                    &candidates,
                    category,
                    targets.for_category(category),
                    &mut rng,
                )?;
                chosen.push(dish);
            }

            let totals = sum_macros(chosen.iter().copied());
            daily_plans.push(DailyMealPlan {
                date: date.format("%Y-%m-%d").to_string(),
                breakfast_dish_id: chosen[0].id.clone(),
                lunch_dish_id: chosen[1].id.clone(),
                dinner_dish_id: chosen[2].id.clone(),
                snack_dish_ids: vec![chosen[3].id.clone()],
                total_calories: totals.calories,
                total_protein: totals.protein,
                total_carbs: totals.carbs,
                total_fats: totals.fats,
            });
        }

        Ok(GeneratedDietPlan {
            name: format!("My {}-Day Diet Plan", duration_days),
            start_date: start_date.format("%Y-%m-%d").to_string(),
            end_date: end_date.format("%Y-%m-%d").to_string(),
            targets: *goals,
            daily_plans,
        })
    }
}
