use thiserror::Error;

#[derive(Error, Debug)]
pub enum DietPlanningError {
    #[error("Nutrition goals have not been calculated yet; run the nutrition calculation first")]
    MissingNutritionGoals,

    #[error("No dishes available in the catalog; seed the catalog first")]
    EmptyCatalog,

    #[error("No candidate dishes for {category}")]
    NoCandidates { category: &'static str },

    #[error("Invalid day index {index}; plan has {days} days")]
    InvalidDayIndex { index: usize, days: usize },

    #[error("Unknown meal slot: {0}")]
    UnknownMealSlot(String),

    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("No active diet plan found for user")]
    NoActivePlan,

    #[error("Diet plan not found: {0}")]
    PlanNotFound(String),

    #[error("User error: {0}")]
    User(#[from] user::UserError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
