use crate::error::WorkoutPlanningError;
use crate::prescription::{workout_type_for_day, Prescription, PrimaryGoal, WorkoutType};
use catalog::{Difficulty, Exercise};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Substituted when a catalog item carries no duration.
pub const FALLBACK_DURATION_MIN: i64 = 30;
/// Substituted when a catalog item carries no burn rate.
pub const FALLBACK_KCAL_PER_MIN: i64 = 5;
/// Rest between sets, seconds.
pub const DEFAULT_REST_SEC: i64 = 60;

/// One prescribed exercise within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub exercise_id: String,
    pub sets: i64,
    pub reps: String,
    pub weight_kg: i64,
    pub duration_min: i64,
    pub rest_sec: i64,
}

impl ExerciseEntry {
    /// Duration used by the aggregator; zero reads as the fallback.
    pub fn effective_duration_min(&self) -> i64 {
        if self.duration_min > 0 {
            self.duration_min
        } else {
            FALLBACK_DURATION_MIN
        }
    }
}

/// One day of a generated workout plan. Rest days carry no exercises and
/// zero totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWorkout {
    pub date: String, // %Y-%m-%d
    pub workout_type: String,
    pub exercises: Vec<ExerciseEntry>,
    pub total_duration_min: i64,
    pub estimated_calories: i64,
}

/// A generated workout plan before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWorkoutPlan {
    pub name: String,
    pub fitness_level: Difficulty,
    pub primary_goal: PrimaryGoal,
    pub start_date: String,
    pub end_date: String,
    pub duration_days: u32,
    pub workouts_per_week: u32,
    pub daily_workouts: Vec<DailyWorkout>,
}

/// Workout plan generation: schedule training days, draw exercises
/// uniformly from the filtered pool, aggregate duration and calorie
/// estimates.
pub struct WorkoutPlanAlgorithm;

impl WorkoutPlanAlgorithm {
    pub fn generate(
        start_date: NaiveDate,
        duration_days: u32,
        workouts_per_week: u32,
        level: Difficulty,
        goal: PrimaryGoal,
        candidates: &[&Exercise],
        seed: Option<u64>,
    ) -> Result<GeneratedWorkoutPlan, WorkoutPlanningError> {
        if candidates.is_empty() {
            return Err(WorkoutPlanningError::NoCandidates);
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

        let duration_days = duration_days.max(1);
        let workouts_per_week = workouts_per_week.max(1);
        let prescription = Prescription::for_level(level);
        let end_date = start_date + chrono::Duration::days(duration_days as i64 - 1);

        let mut daily_workouts = Vec::with_capacity(duration_days as usize);
        for day_index in 0..duration_days {
            let date = (start_date + chrono::Duration::days(day_index as i64))
                .format("%Y-%m-%d")
                .to_string();
            let workout_type =
                workout_type_for_day(goal, day_index, duration_days, workouts_per_week);

            if workout_type == WorkoutType::Rest {
                daily_workouts.push(DailyWorkout {
                    date,
                    workout_type: workout_type.as_str().to_string(),
                    exercises: Vec::new(),
                    total_duration_min: 0,
                    estimated_calories: 0,
                });
                continue;
            }

            let slots = prescription.exercises_per_day.min(candidates.len());
            let mut exercises = Vec::with_capacity(slots);
            let mut total_duration_min = 0;
            let mut estimated_calories = 0;
            for _ in 0..slots {
                // Uniform draw with replacement; repeats are allowed.
                let exercise = candidates
                    .choose(&mut rng)
                    .ok_or(WorkoutPlanningError::NoCandidates)?;
                let entry = ExerciseEntry {
                    exercise_id: exercise.id.clone(),
                    sets: prescription.sets,
                    reps: prescription.reps.to_string(),
                    weight_kg: 0,
                    duration_min: exercise.duration_min.unwrap_or(0),
                    rest_sec: DEFAULT_REST_SEC,
                };
                let minutes = entry.effective_duration_min();
                total_duration_min += minutes;
                estimated_calories +=
                    exercise.calories_per_min.unwrap_or(FALLBACK_KCAL_PER_MIN) * minutes;
                exercises.push(entry);
            }

            daily_workouts.push(DailyWorkout {
                date,
                workout_type: workout_type.as_str().to_string(),
                exercises,
                total_duration_min,
                estimated_calories,
            });
        }

        Ok(GeneratedWorkoutPlan {
            name: format!("My {}-Day {} Plan", duration_days, goal.title()),
            fitness_level: level,
            primary_goal: goal,
            start_date: start_date.format("%Y-%m-%d").to_string(),
            end_date: end_date.format("%Y-%m-%d").to_string(),
            duration_days,
            workouts_per_week,
            daily_workouts,
        })
    }
}
