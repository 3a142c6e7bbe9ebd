use catalog::{Difficulty, ExerciseCategory};
use serde::{Deserialize, Serialize};
use user::ActivityLevel;

/// Training goal a workout plan is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryGoal {
    WeightLoss,
    MuscleGain,
    Strength,
    Flexibility,
    Endurance,
    GeneralFitness,
}

impl PrimaryGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryGoal::WeightLoss => "weight-loss",
            PrimaryGoal::MuscleGain => "muscle-gain",
            PrimaryGoal::Strength => "strength",
            PrimaryGoal::Flexibility => "flexibility",
            PrimaryGoal::Endurance => "endurance",
            PrimaryGoal::GeneralFitness => "general-fitness",
        }
    }

    /// Unknown strings fall back to general fitness.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weight-loss" => PrimaryGoal::WeightLoss,
            "muscle-gain" => PrimaryGoal::MuscleGain,
            "strength" => PrimaryGoal::Strength,
            "flexibility" => PrimaryGoal::Flexibility,
            "endurance" => PrimaryGoal::Endurance,
            _ => PrimaryGoal::GeneralFitness,
        }
    }

    /// Display name used in generated plan titles, e.g. "Weight-loss".
    pub fn title(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Exercise categories admissible for this goal. `None` means the goal
    /// does not constrain the category.
    pub fn category_set(&self) -> Option<&'static [ExerciseCategory]> {
        match self {
            PrimaryGoal::WeightLoss => {
                Some(&[ExerciseCategory::Cardio, ExerciseCategory::Hiit])
            }
            PrimaryGoal::MuscleGain | PrimaryGoal::Strength => {
                Some(&[ExerciseCategory::Strength])
            }
            PrimaryGoal::Flexibility => Some(&[
                ExerciseCategory::Flexibility,
                ExerciseCategory::Yoga,
                ExerciseCategory::Pilates,
            ]),
            PrimaryGoal::Endurance => {
                Some(&[ExerciseCategory::Cardio, ExerciseCategory::Sports])
            }
            PrimaryGoal::GeneralFitness => None,
        }
    }
}

/// Per-workout volume prescription derived from the fitness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub exercises_per_day: usize,
    pub sets: i64,
    pub reps: &'static str,
}

impl Prescription {
    pub fn for_level(level: Difficulty) -> Self {
        match level {
            Difficulty::Beginner => Prescription {
                exercises_per_day: 4,
                sets: 2,
                reps: "8-10",
            },
            Difficulty::Intermediate => Prescription {
                exercises_per_day: 5,
                sets: 3,
                reps: "10-12",
            },
            Difficulty::Advanced => Prescription {
                exercises_per_day: 6,
                sets: 4,
                reps: "12-15",
            },
        }
    }
}

/// Fitness level for the plan: the explicit request wins, otherwise it is
/// inferred from the stored activity level. An unset activity level reads
/// as advanced, matching how the inference chain falls through.
pub fn derive_fitness_level(
    explicit: Option<Difficulty>,
    activity: Option<ActivityLevel>,
) -> Difficulty {
    if let Some(level) = explicit {
        return level;
    }
    match activity {
        Some(ActivityLevel::Sedentary) | Some(ActivityLevel::Light) => Difficulty::Beginner,
        Some(ActivityLevel::Moderate) => Difficulty::Intermediate,
        _ => Difficulty::Advanced,
    }
}

/// Goal for the plan: explicit request, then the stored profile goal, then
/// general fitness.
pub fn derive_goal(explicit: Option<PrimaryGoal>, stored: Option<&str>) -> PrimaryGoal {
    explicit.unwrap_or_else(|| match stored {
        Some(s) => PrimaryGoal::parse(s),
        None => PrimaryGoal::GeneralFitness,
    })
}

/// What a given day of the plan holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    Strength,
    Cardio,
    Hiit,
    Flexibility,
    FullBody,
    Rest,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Hiit => "hiit",
            WorkoutType::Flexibility => "flexibility",
            WorkoutType::FullBody => "full-body",
            WorkoutType::Rest => "rest",
        }
    }
}

/// Workout/rest schedule: training days fall where the day index is a
/// multiple of `ceil(days / workouts_per_week)`. Weight-loss alternates
/// cardio and HIIT by day parity.
pub fn workout_type_for_day(
    goal: PrimaryGoal,
    day_index: u32,
    duration_days: u32,
    workouts_per_week: u32,
) -> WorkoutType {
    let spacing = duration_days.div_ceil(workouts_per_week).max(1);
    if day_index % spacing != 0 {
        return WorkoutType::Rest;
    }
    match goal {
        PrimaryGoal::WeightLoss => {
            if day_index % 2 == 0 {
                WorkoutType::Cardio
            } else {
                WorkoutType::Hiit
            }
        }
        PrimaryGoal::MuscleGain | PrimaryGoal::Strength => WorkoutType::Strength,
        PrimaryGoal::Flexibility => WorkoutType::Flexibility,
        _ => WorkoutType::FullBody,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prescriptions_scale_with_level() {
        let beginner = Prescription::for_level(Difficulty::Beginner);
        assert_eq!(
            (beginner.exercises_per_day, beginner.sets, beginner.reps),
            (4, 2, "8-10")
        );
        let intermediate = Prescription::for_level(Difficulty::Intermediate);
        assert_eq!(
            (
                intermediate.exercises_per_day,
                intermediate.sets,
                intermediate.reps
            ),
            (5, 3, "10-12")
        );
        let advanced = Prescription::for_level(Difficulty::Advanced);
        assert_eq!(
            (advanced.exercises_per_day, advanced.sets, advanced.reps),
            (6, 4, "12-15")
        );
    }

    #[test]
    fn fitness_level_falls_back_from_activity() {
        assert_eq!(
            derive_fitness_level(None, Some(ActivityLevel::Light)),
            Difficulty::Beginner
        );
        assert_eq!(
            derive_fitness_level(None, Some(ActivityLevel::Moderate)),
            Difficulty::Intermediate
        );
        assert_eq!(
            derive_fitness_level(None, Some(ActivityLevel::VeryActive)),
            Difficulty::Advanced
        );
        assert_eq!(derive_fitness_level(None, None), Difficulty::Advanced);
        assert_eq!(
            derive_fitness_level(Some(Difficulty::Beginner), Some(ActivityLevel::VeryActive)),
            Difficulty::Beginner
        );
    }

    #[test]
    fn seven_day_three_per_week_schedule() {
        let types: Vec<WorkoutType> = (0..7)
            .map(|i| workout_type_for_day(PrimaryGoal::GeneralFitness, i, 7, 3))
            .collect();
        assert_eq!(
            types,
            vec![
                WorkoutType::FullBody,
                WorkoutType::Rest,
                WorkoutType::Rest,
                WorkoutType::FullBody,
                WorkoutType::Rest,
                WorkoutType::Rest,
                WorkoutType::FullBody,
            ]
        );
    }

    #[test]
    fn weight_loss_alternates_cardio_and_hiit() {
        // Spacing 1 makes every day a training day.
        let types: Vec<WorkoutType> = (0..4)
            .map(|i| workout_type_for_day(PrimaryGoal::WeightLoss, i, 7, 7))
            .collect();
        assert_eq!(
            types,
            vec![
                WorkoutType::Cardio,
                WorkoutType::Hiit,
                WorkoutType::Cardio,
                WorkoutType::Hiit,
            ]
        );
    }

    #[test]
    fn goal_parse_defaults_to_general_fitness() {
        assert_eq!(PrimaryGoal::parse("powerlifting"), PrimaryGoal::GeneralFitness);
        assert_eq!(PrimaryGoal::parse("weight-loss"), PrimaryGoal::WeightLoss);
        assert_eq!(PrimaryGoal::WeightLoss.title(), "Weight-loss");
    }
}
