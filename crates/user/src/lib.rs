pub mod error;
pub mod nutrition;
pub mod read_model;
pub mod types;

pub use error::UserError;
pub use nutrition::{calculate_nutrition, NutritionInput, NutritionSummary};
pub use read_model::{UserProfileRow, UserQueries};
pub use types::{ActivityLevel, Gender, NutritionGoals, WeightGoal};
