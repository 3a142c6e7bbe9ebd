//! Per-meal target derivation.
//!
//! Daily macro goals are split over the four meal slots with a fixed
//! distribution table. Each slot target rounds to the nearest whole unit
//! independently; the rounded slot targets may therefore drift a few
//! units from the daily total, which is accepted rather than
//! renormalized (targets are soft inputs to the matcher, not totals).

use catalog::MealCategory;
use serde::{Deserialize, Serialize};
use user::NutritionGoals;

/// Share of the daily calories/protein assigned to one meal slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotShare {
    pub category: MealCategory,
    pub calorie_share: f64,
    pub protein_share: f64,
}

/// Meal distribution table: breakfast 20%/25%, lunch 35%/35%,
/// dinner 30%/25%, snack 15%/15% (calories/protein).
pub const MEAL_DISTRIBUTION: [SlotShare; 4] = [
    SlotShare {
        category: MealCategory::Breakfast,
        calorie_share: 0.20,
        protein_share: 0.25,
    },
    SlotShare {
        category: MealCategory::Lunch,
        calorie_share: 0.35,
        protein_share: 0.35,
    },
    SlotShare {
        category: MealCategory::Dinner,
        calorie_share: 0.30,
        protein_share: 0.25,
    },
    SlotShare {
        category: MealCategory::Snack,
        calorie_share: 0.15,
        protein_share: 0.15,
    },
];

/// Numeric target for a single meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTargets {
    pub calories: i64,
    pub protein: i64,
}

/// Derived per-slot targets for one day. Ephemeral: computed per
/// generation call, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct DayTargets {
    pub breakfast: MealTargets,
    pub lunch: MealTargets,
    pub dinner: MealTargets,
    pub snack: MealTargets,
}

impl DayTargets {
    pub fn derive(goals: &NutritionGoals) -> DayTargets {
        let slot = |share: &SlotShare| MealTargets {
            calories: (goals.target_calories as f64 * share.calorie_share).round() as i64,
            protein: (goals.target_protein as f64 * share.protein_share).round() as i64,
        };
        DayTargets {
            breakfast: slot(&MEAL_DISTRIBUTION[0]),
            lunch: slot(&MEAL_DISTRIBUTION[1]),
            dinner: slot(&MEAL_DISTRIBUTION[2]),
            snack: slot(&MEAL_DISTRIBUTION[3]),
        }
    }

    pub fn for_category(&self, category: MealCategory) -> MealTargets {
        match category {
            MealCategory::Breakfast => self.breakfast,
            MealCategory::Lunch => self.lunch,
            MealCategory::Dinner => self.dinner,
            MealCategory::Snack => self.snack,
        }
    }
}
