use serde::{Deserialize, Serialize};

/// Exercise catalog category. Workout goals map onto subsets of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Hiit,
    Flexibility,
    Yoga,
    Pilates,
    Sports,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::Hiit => "hiit",
            ExerciseCategory::Flexibility => "flexibility",
            ExerciseCategory::Yoga => "yoga",
            ExerciseCategory::Pilates => "pilates",
            ExerciseCategory::Sports => "sports",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strength" => Some(ExerciseCategory::Strength),
            "cardio" => Some(ExerciseCategory::Cardio),
            "hiit" => Some(ExerciseCategory::Hiit),
            "flexibility" => Some(ExerciseCategory::Flexibility),
            "yoga" => Some(ExerciseCategory::Yoga),
            "pilates" => Some(ExerciseCategory::Pilates),
            "sports" => Some(ExerciseCategory::Sports),
            _ => None,
        }
    }
}

/// Difficulty rating; candidate filtering requires an exact match against
/// the user's derived fitness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// Catalog exercise row (exercises table). `duration_min` and
/// `calories_per_min` are optional on the catalog side; aggregation
/// substitutes documented fallback constants when absent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub equipment: String,
    pub muscle_groups: String, // JSON array of strings
    pub duration_min: Option<i64>,
    pub calories_per_min: Option<i64>,
    pub is_active: bool,
}

impl Exercise {
    pub fn exercise_category(&self) -> Option<ExerciseCategory> {
        ExerciseCategory::parse(&self.category)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::parse(&self.difficulty)
    }

    pub fn muscle_group_list(&self) -> Vec<String> {
        serde_json::from_str(&self.muscle_groups).unwrap_or_default()
    }
}
