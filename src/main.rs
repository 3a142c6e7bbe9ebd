use anyhow::Result;
use catalog::{seed_catalog, Difficulty};
use clap::{Parser, Subcommand};
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, SqlitePool};
use user::{
    calculate_nutrition, ActivityLevel, Gender, NutritionInput, UserQueries, WeightGoal,
};
use uuid::Uuid;
use workout_planning::PrimaryGoal;

/// fittrack - Diet and workout plan generation
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Diet and workout plan generation over a dish and exercise catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Load the starter dish and exercise catalog
    Seed,
    /// Create a new user
    CreateUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Explicit user id; generated when omitted
        #[arg(long)]
        id: Option<String>,
    },
    /// Update a user's fitness and diet profile
    SetProfile {
        #[arg(long)]
        user: String,
        #[arg(long)]
        activity: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        goal: Option<String>,
        #[arg(long)]
        dietary: Option<String>,
        /// Equipment preference slugs, repeatable
        #[arg(long)]
        equipment: Vec<String>,
    },
    /// Calculate daily nutrition targets and store them on the profile
    CalculateNutrition {
        #[arg(long)]
        user: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        weight_kg: f64,
        #[arg(long)]
        height_cm: f64,
        #[arg(long)]
        activity: String,
        #[arg(long)]
        goal: String,
    },
    /// Generate a diet plan, superseding the user's current one
    GenerateDiet {
        #[arg(long)]
        user: String,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a workout plan, superseding the user's current one
    GenerateWorkout {
        #[arg(long)]
        user: String,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        workouts_per_week: Option<u32>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        goal: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replace one dish in one day of the current diet plan
    SwapDish {
        #[arg(long)]
        user: String,
        #[arg(long)]
        day: usize,
        #[arg(long)]
        slot: String,
        #[arg(long)]
        old_dish: String,
        #[arg(long)]
        new_dish: String,
    },
    /// Mark one day of the current workout plan completed
    CompleteWorkout {
        #[arg(long)]
        user: String,
        #[arg(long)]
        day: usize,
    },
    /// Print the current diet plan
    ShowDiet {
        #[arg(long)]
        user: String,
    },
    /// Print the current workout plan
    ShowWorkout {
        #[arg(long)]
        user: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fittrack::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fittrack::observability::init_observability(
        "fittrack",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Seed => {
            let pool = connect(&config).await?;
            let (dishes, exercises) = seed_catalog(&pool).await?;
            tracing::info!(dishes, exercises, "Catalog seeded");
            Ok(())
        }
        Commands::CreateUser {
            username,
            email,
            id,
        } => {
            let pool = connect(&config).await?;
            let user_id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
            UserQueries::create_user(&user_id, &username, &email, &pool).await?;
            tracing::info!(user_id = %user_id, "User created");
            println!("{}", user_id);
            Ok(())
        }
        Commands::SetProfile {
            user,
            activity,
            level,
            goal,
            dietary,
            equipment,
        } => {
            let pool = connect(&config).await?;
            UserQueries::update_fitness_profile(
                &user,
                activity.as_deref(),
                level.as_deref(),
                goal.as_deref(),
                dietary.as_deref(),
                &pool,
            )
            .await?;
            if !equipment.is_empty() {
                UserQueries::save_equipment_preferences(&user, &equipment, &pool).await?;
            }
            tracing::info!(user_id = %user, "Profile updated");
            Ok(())
        }
        Commands::CalculateNutrition {
            user,
            age,
            gender,
            weight_kg,
            height_cm,
            activity,
            goal,
        } => {
            let pool = connect(&config).await?;
            let input = NutritionInput {
                age,
                gender: Gender::parse(&gender)
                    .ok_or_else(|| anyhow::anyhow!("Unknown gender: {gender}"))?,
                weight_kg,
                height_cm,
                activity: ActivityLevel::parse(&activity)
                    .ok_or_else(|| anyhow::anyhow!("Unknown activity level: {activity}"))?,
                goal: WeightGoal::parse(&goal)
                    .ok_or_else(|| anyhow::anyhow!("Unknown weight goal: {goal}"))?,
            };
            let summary = calculate_nutrition(&input);
            UserQueries::save_nutrition_goals(&user, &summary.goals(), &pool).await?;
            UserQueries::update_fitness_profile(&user, Some(&activity), None, None, None, &pool)
                .await?;
            tracing::info!(user_id = %user, calories = summary.calories, "Nutrition goals saved");
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Commands::GenerateDiet { user, days, seed } => {
            let pool = connect(&config).await?;
            let days = days.unwrap_or(config.planning.duration_days);
            let plan = diet_planning::generate_diet_plan(&user, days, seed, &pool).await?;
            tracing::info!(
                user_id = %user,
                plan_id = %plan.plan.id,
                days = plan.days.len(),
                "Diet plan generated"
            );
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Commands::GenerateWorkout {
            user,
            days,
            workouts_per_week,
            level,
            goal,
            seed,
        } => {
            let pool = connect(&config).await?;
            let days = days.unwrap_or(config.planning.duration_days);
            let workouts_per_week =
                workouts_per_week.unwrap_or(config.planning.workouts_per_week);
            let level = match level {
                Some(s) => Some(
                    Difficulty::parse(&s)
                        .ok_or_else(|| anyhow::anyhow!("Unknown fitness level: {s}"))?,
                ),
                None => None,
            };
            let goal = goal.map(|s| PrimaryGoal::parse(&s));
            let plan = workout_planning::generate_workout_plan(
                &user,
                days,
                workouts_per_week,
                level,
                goal,
                seed,
                &pool,
            )
            .await?;
            tracing::info!(
                user_id = %user,
                plan_id = %plan.plan.id,
                days = plan.days.len(),
                "Workout plan generated"
            );
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Commands::SwapDish {
            user,
            day,
            slot,
            old_dish,
            new_dish,
        } => {
            let pool = connect(&config).await?;
            let updated =
                diet_planning::swap_dish(&user, day, &slot, &old_dish, &new_dish, &pool).await?;
            tracing::info!(user_id = %user, day_index = day, "Dish swapped");
            println!("{}", serde_json::to_string_pretty(&updated)?);
            Ok(())
        }
        Commands::CompleteWorkout { user, day } => {
            let pool = connect(&config).await?;
            let plan = workout_planning::complete_workout(&user, day, &pool).await?;
            tracing::info!(
                user_id = %user,
                day_index = day,
                streak = plan.plan.current_streak,
                "Workout completed"
            );
            println!("{}", serde_json::to_string_pretty(&plan.plan)?);
            Ok(())
        }
        Commands::ShowDiet { user } => {
            let pool = connect(&config).await?;
            let plan = diet_planning::current_diet_plan(&user, &pool).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Commands::ShowWorkout { user } => {
            let pool = connect(&config).await?;
            let plan = workout_planning::current_workout_plan(&user, &pool).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
    }
}

async fn connect(config: &fittrack::config::Config) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: fittrack::config::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;

    run_migrations(&db_pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: fittrack::config::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await
}
