use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{CalorieError, Result};
use crate::models::{normalize_name, FoodRecord};

/// Minimum Jaro-Winkler score for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only food catalog, in source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: Vec<FoodRecord>,
    /// Lowercase name -> index of the first record with that name.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records in source order.
    ///
    /// Duplicate names are kept; lookups resolve to the first occurrence.
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        let mut index = HashMap::with_capacity(foods.len());
        for (i, food) in foods.iter().enumerate() {
            index.entry(food.key()).or_insert(i);
        }
        Self { foods, index }
    }

    /// Find a food by exact name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Result<&FoodRecord> {
        let key = normalize_name(name);
        match self.index.get(&key) {
            Some(&i) => {
                let food = &self.foods[i];
                tracing::debug!(query = name, food = %food.debug_string(), "catalog hit");
                Ok(food)
            }
            None => {
                tracing::debug!(query = name, "catalog miss");
                Err(CalorieError::FoodNotFound(name.trim().to_string()))
            }
        }
    }

    /// Names close to `name`, best match first. Never used to resolve a lookup.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&str> {
        let query = normalize_name(name);
        if query.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(&FoodRecord, f64)> = self
            .index
            .values()
            .map(|&i| &self.foods[i])
            .map(|f| (f, jaro_winkler(&f.key(), &query)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name().cmp(b.0.name()))
        });

        candidates
            .into_iter()
            .take(limit)
            .map(|(f, _)| f.name())
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut keys: Vec<String> = Vec::new();
        let mut seen: Vec<&str> = Vec::new();
        for food in &self.foods {
            let key = normalize_name(food.category());
            if !keys.contains(&key) {
                keys.push(key);
                seen.push(food.category());
            }
        }
        seen
    }

    /// Foods in the given category (case-insensitive), in source order.
    pub fn by_category(&self, category: &str) -> Vec<&FoodRecord> {
        let wanted = normalize_name(category);
        self.foods
            .iter()
            .filter(|f| normalize_name(f.category()) == wanted)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodRecord> {
        self.foods.iter()
    }

    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    /// Count of records, duplicates included.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            FoodRecord::new("Banana", 118.0, 105.0, "Fruit").unwrap(),
            FoodRecord::new("Bread", 30.0, 80.0, "Bakery").unwrap(),
            FoodRecord::new("banana", 100.0, 89.0, "Fruit").unwrap(),
            FoodRecord::new("Brown Rice", 195.0, 216.0, "Grains").unwrap(),
        ])
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        crate::logging::init_test();
        let catalog = sample_catalog();
        assert!(catalog.find_by_name("bread").is_ok());
        assert!(catalog.find_by_name("BREAD").is_ok());
        assert!(catalog.find_by_name("  Brown rice ").is_ok());
    }

    #[test]
    fn test_duplicate_name_first_wins() {
        let catalog = sample_catalog();
        let food = catalog.find_by_name("BANANA").unwrap();
        assert_eq!(food.reference_grams(), 118.0);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_find_missing() {
        let catalog = sample_catalog();
        match catalog.find_by_name("doesnotexist") {
            Err(CalorieError::FoodNotFound(name)) => assert_eq!(name, "doesnotexist"),
            other => panic!("expected FoodNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_no_partial_match() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_name("Brown").is_err());
        assert!(catalog.find_by_name("banan").is_err());
    }

    #[test]
    fn test_suggest() {
        let catalog = sample_catalog();
        let suggestions = catalog.suggest("banan", 3);
        assert_eq!(suggestions.first().copied(), Some("Banana"));
        assert!(catalog.suggest("zzzzzz", 3).is_empty());
        assert!(catalog.suggest("   ", 3).is_empty());
    }

    #[test]
    fn test_categories() {
        let catalog = sample_catalog();
        assert_eq!(catalog.categories(), vec!["Fruit", "Bakery", "Grains"]);
        assert_eq!(catalog.by_category("fruit").len(), 2);
        assert!(catalog.by_category("Dairy").is_empty());
    }

    #[test]
    fn test_categories_agree_with_by_category_on_unicode() {
        let catalog = Catalog::new(vec![
            FoodRecord::new("Crème Brûlée", 100.0, 330.0, "DÉSSERT").unwrap(),
            FoodRecord::new("Éclair", 100.0, 262.0, "déssert").unwrap(),
        ]);

        let categories = catalog.categories();
        assert_eq!(categories, vec!["DÉSSERT"]);
        for category in categories {
            assert_eq!(catalog.by_category(category).len(), 2);
        }
    }
}
