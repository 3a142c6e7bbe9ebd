pub mod dish;
pub mod exercise;
pub mod queries;
pub mod seed;

pub use dish::{Dish, DietaryType, MealCategory};
pub use exercise::{Difficulty, Exercise, ExerciseCategory};
pub use queries::CatalogQueries;
pub use seed::{seed_catalog, starter_dishes, starter_exercises};
