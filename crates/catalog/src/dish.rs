use serde::{Deserialize, Serialize};

/// Meal slot a dish belongs to. Every dish is tagged with exactly one
/// category; plan generation only ever draws candidates from a single
/// category at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealCategory::Breakfast),
            "lunch" => Some(MealCategory::Lunch),
            "dinner" => Some(MealCategory::Dinner),
            "snack" | "snacks" => Some(MealCategory::Snack),
            _ => None,
        }
    }
}

/// Dietary classification of a dish, and of a user's preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietaryType {
    Vegetarian,
    Vegan,
    NonVegetarian,
    Eggetarian,
}

impl DietaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryType::Vegetarian => "vegetarian",
            DietaryType::Vegan => "vegan",
            DietaryType::NonVegetarian => "non-vegetarian",
            DietaryType::Eggetarian => "eggetarian",
        }
    }

    /// Unknown strings fall back to vegetarian, the schema default.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "vegan" => DietaryType::Vegan,
            "non-vegetarian" => DietaryType::NonVegetarian,
            "eggetarian" => DietaryType::Eggetarian,
            _ => DietaryType::Vegetarian,
        }
    }

    /// Vegetarian users may eat anything not tagged non-vegetarian
    /// (vegan and eggetarian dishes included).
    pub fn admissible_for_vegetarian(&self) -> bool {
        !matches!(self, DietaryType::NonVegetarian)
    }
}

/// Catalog dish row (dishes table). Read-only reference data to the plan
/// generator; macro fields are integer-valued so slot totals stay exact.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
    pub fiber: i64,
    pub ingredients: String, // JSON array of strings
    pub instructions: String,
    pub prep_time_min: i64,
    pub cook_time_min: i64,
    pub servings: i64,
    pub dietary_type: String,
}

impl Dish {
    pub fn meal_category(&self) -> Option<MealCategory> {
        MealCategory::parse(&self.category)
    }

    pub fn dietary_type(&self) -> DietaryType {
        DietaryType::parse(&self.dietary_type)
    }

    pub fn ingredient_list(&self) -> Vec<String> {
        serde_json::from_str(&self.ingredients).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_category_round_trips() {
        for category in MealCategory::ALL {
            assert_eq!(MealCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(MealCategory::parse("brunch"), None);
    }

    #[test]
    fn vegetarian_admissibility_excludes_only_non_veg() {
        assert!(DietaryType::Vegetarian.admissible_for_vegetarian());
        assert!(DietaryType::Vegan.admissible_for_vegetarian());
        assert!(DietaryType::Eggetarian.admissible_for_vegetarian());
        assert!(!DietaryType::NonVegetarian.admissible_for_vegetarian());
    }

    #[test]
    fn unknown_dietary_string_defaults_to_vegetarian() {
        assert_eq!(DietaryType::parse("pescatarian"), DietaryType::Vegetarian);
    }
}
