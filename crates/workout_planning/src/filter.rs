use catalog::{Exercise, ExerciseCategory};

/// Largest candidate pool handed to the allocator.
pub const MAX_CANDIDATES: usize = 50;

/// Map a stored preference slug to the catalog's equipment tag. Unknown
/// slugs count as bodyweight.
fn map_equipment_pref(pref: &str) -> &'static str {
    match pref {
        "bodyweight" => "bodyweight",
        "free-weights" => "dumbbells",
        "machines" => "machine",
        "resistance-bands" => "resistance-bands",
        _ => "bodyweight",
    }
}

/// Narrow an active-at-difficulty exercise snapshot to the goal's category
/// set and the user's equipment, capped at `MAX_CANDIDATES`.
///
/// An empty preference list leaves equipment unconstrained; otherwise the
/// allowed set is the mapped preferences plus bodyweight and no-equipment
/// items, so a pool always remains reachable without gear.
pub fn eligible_exercises<'a>(
    exercises: &'a [Exercise],
    categories: Option<&[ExerciseCategory]>,
    equipment_prefs: &[String],
) -> Vec<&'a Exercise> {
    let allowed_equipment: Option<Vec<&'static str>> = if equipment_prefs.is_empty() {
        None
    } else {
        let mut allowed: Vec<&'static str> = equipment_prefs
            .iter()
            .map(|p| map_equipment_pref(p))
            .collect();
        allowed.push("bodyweight");
        allowed.push("none");
        Some(allowed)
    };

    exercises
        .iter()
        .filter(|exercise| match categories {
            Some(set) => exercise
                .exercise_category()
                .map(|c| set.contains(&c))
                .unwrap_or(false),
            None => true,
        })
        .filter(|exercise| match &allowed_equipment {
            Some(allowed) => allowed.iter().any(|e| *e == exercise.equipment),
            None => true,
        })
        .take(MAX_CANDIDATES)
        .collect()
}
