//! Daily nutrition requirement calculation.
//!
//! BMR uses the Mifflin-St Jeor equation, scaled by the activity
//! multiplier to TDEE, then adjusted for the weight goal. Protein scales
//! with body weight by goal/activity tier; fats take 25% of calories at
//! 9 kcal/g and carbs the remaining calories at 4 kcal/g.

use crate::types::{ActivityLevel, Gender, NutritionGoals, WeightGoal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutritionInput {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    pub goal: WeightGoal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
    pub bmr: i64,
    pub tdee: i64,
}

impl NutritionSummary {
    pub fn goals(&self) -> NutritionGoals {
        NutritionGoals {
            target_calories: self.calories,
            target_protein: self.protein,
            target_carbs: self.carbs,
            target_fats: self.fats,
        }
    }
}

const FAT_CALORIE_SHARE: f64 = 0.25;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

pub fn calculate_nutrition(input: &NutritionInput) -> NutritionSummary {
    let NutritionInput {
        age,
        gender,
        weight_kg,
        height_cm,
        activity,
        goal,
    } = *input;

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    };

    let tdee = bmr * activity.multiplier();
    let target_calories = tdee + goal.calorie_adjustment();

    let protein_per_kg = if goal == WeightGoal::Gain {
        2.0
    } else if matches!(activity, ActivityLevel::Active | ActivityLevel::VeryActive) {
        1.6
    } else {
        1.2
    };

    let protein = (weight_kg * protein_per_kg).round();
    let fats = (target_calories * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT).round();
    let carbs = ((target_calories - protein * KCAL_PER_GRAM_PROTEIN - fats * KCAL_PER_GRAM_FAT)
        / KCAL_PER_GRAM_CARB)
        .round();

    NutritionSummary {
        calories: target_calories.round() as i64,
        protein: protein as i64,
        carbs: carbs as i64,
        fats: fats as i64,
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
    }
}
