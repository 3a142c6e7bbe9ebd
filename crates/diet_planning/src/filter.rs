//! Candidate filtering for meal slots.

use catalog::{DietaryType, Dish, MealCategory};

/// Narrow a catalog snapshot to the dishes eligible for one meal slot.
///
/// Filters by slot category, then by the user's dietary type: vegetarian
/// users exclude dishes tagged non-vegetarian; every other dietary type
/// admits the full category. If the dietary filter empties the pool, the
/// full category set is used instead, so a slot never starves on dietary
/// grounds while the category has any dish at all.
///
/// The result preserves catalog order, so filtering the same snapshot
/// with the same criteria twice yields the same candidate set.
pub fn eligible_dishes<'a>(
    dishes: &'a [Dish],
    category: MealCategory,
    dietary: DietaryType,
) -> Vec<&'a Dish> {
    let in_category: Vec<&Dish> = dishes
        .iter()
        .filter(|d| d.meal_category() == Some(category))
        .collect();

    if dietary != DietaryType::Vegetarian {
        return in_category;
    }

    let compatible: Vec<&Dish> = in_category
        .iter()
        .copied()
        .filter(|d| d.dietary_type().admissible_for_vegetarian())
        .collect();

    if compatible.is_empty() {
        in_category
    } else {
        compatible
    }
}
