use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutPlanningError {
    #[error("No exercises available for this level and goal; seed the catalog first")]
    NoCandidates,

    #[error("Invalid day index {index}; plan has {days} days")]
    InvalidDayIndex { index: usize, days: usize },

    #[error("No active workout plan found for user")]
    NoActivePlan,

    #[error("Workout plan not found: {0}")]
    PlanNotFound(String),

    #[error("User error: {0}")]
    User(#[from] user::UserError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
