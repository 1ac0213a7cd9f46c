use crate::error::{CalorieError, Result};

/// A catalog food item: calories for a reference weight, plus a free-text category.
///
/// Records are immutable once built; `reference_grams` is always positive and finite.
#[derive(Debug, Clone)]
pub struct FoodRecord {
    name: String,
    reference_grams: f64,
    reference_calories: f64,
    category: String,
}

impl FoodRecord {
    /// Build a record, rejecting an empty name, non-positive reference grams and
    /// negative calories.
    pub fn new(
        name: impl Into<String>,
        reference_grams: f64,
        reference_calories: f64,
        category: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CalorieError::InvalidInput("food name is empty".to_string()));
        }
        if !reference_grams.is_finite() || reference_grams <= 0.0 {
            return Err(CalorieError::InvalidInput(format!(
                "'{}': reference grams must be positive, got {}",
                name, reference_grams
            )));
        }
        if !reference_calories.is_finite() || reference_calories < 0.0 {
            return Err(CalorieError::InvalidInput(format!(
                "'{}': reference calories must not be negative, got {}",
                name, reference_calories
            )));
        }

        Ok(Self {
            name,
            reference_grams,
            reference_calories,
            category: category.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference_grams(&self) -> f64 {
        self.reference_grams
    }

    pub fn reference_calories(&self) -> f64 {
        self.reference_calories
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Calories contributed by a single gram.
    #[inline]
    pub fn calories_per_gram(&self) -> f64 {
        self.reference_calories / self.reference_grams
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal / {} g ({})",
            self.name, self.reference_calories, self.reference_grams, self.category
        )
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a user-supplied or catalog name for case-insensitive comparison.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl PartialEq for FoodRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodRecord {}

impl std::hash::Hash for FoodRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> FoodRecord {
        FoodRecord::new("Banana", 118.0, 105.0, "Fruit").unwrap()
    }

    #[test]
    fn test_calories_per_gram() {
        let food = banana();
        assert!((food.calories_per_gram() - 105.0 / 118.0).abs() < 1e-12);
    }

    #[test]
    fn test_equality_case_insensitive() {
        let food1 = banana();
        let food2 = FoodRecord::new("BANANA", 100.0, 89.0, "Produce").unwrap();
        assert_eq!(food1, food2);
    }

    #[test]
    fn test_key_trims_whitespace() {
        let food = FoodRecord::new("  Whole Milk ", 244.0, 149.0, "Dairy").unwrap();
        assert_eq!(food.key(), "whole milk");
    }

    #[test]
    fn test_rejects_bad_reference_values() {
        for grams in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                FoodRecord::new("Air", grams, 100.0, "None"),
                Err(CalorieError::InvalidInput(_))
            ));
        }
        for calories in [-5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                FoodRecord::new("Apple", 182.0, calories, "Fruit"),
                Err(CalorieError::InvalidInput(_))
            ));
        }
        assert!(FoodRecord::new("  ", 100.0, 10.0, "None").is_err());
        assert!(FoodRecord::new("Water", 250.0, 0.0, "Drinks").is_ok());
    }
}
