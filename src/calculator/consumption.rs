use crate::catalog::Catalog;
use crate::error::{CalorieError, Result};
use crate::models::FoodRecord;

/// Calories in `grams_consumed` of `food`, scaled linearly from its reference pair.
///
/// Negative or non-finite quantities are rejected; zero is allowed.
pub fn calories_for(food: &FoodRecord, grams_consumed: f64) -> Result<f64> {
    validate_grams(grams_consumed)?;
    Ok(food.calories_per_gram() * grams_consumed)
}

/// Sum of calories over all entries. Empty input yields 0.
pub fn total_calories(entries: &[ConsumptionEntry<'_>]) -> f64 {
    entries.iter().map(ConsumptionEntry::calories).sum()
}

/// Parse a gram quantity typed by the user.
pub fn parse_grams(input: &str) -> Result<f64> {
    let grams: f64 = input.trim().parse().map_err(|_| {
        CalorieError::InvalidInput(format!("'{}' is not a valid number of grams", input.trim()))
    })?;
    validate_grams(grams)?;
    Ok(grams)
}

fn validate_grams(grams: f64) -> Result<()> {
    if !grams.is_finite() || grams < 0.0 {
        tracing::debug!(grams, "rejected gram quantity");
        return Err(CalorieError::InvalidInput(format!(
            "grams consumed must be zero or more, got {}",
            grams
        )));
    }
    Ok(())
}

/// A validated quantity of one catalog food.
#[derive(Debug, Clone, Copy)]
pub struct ConsumptionEntry<'a> {
    food: &'a FoodRecord,
    grams_consumed: f64,
}

impl<'a> ConsumptionEntry<'a> {
    pub fn new(food: &'a FoodRecord, grams_consumed: f64) -> Result<Self> {
        validate_grams(grams_consumed)?;
        Ok(Self {
            food,
            grams_consumed,
        })
    }

    pub fn food(&self) -> &'a FoodRecord {
        self.food
    }

    pub fn grams_consumed(&self) -> f64 {
        self.grams_consumed
    }

    #[inline]
    pub fn calories(&self) -> f64 {
        self.food.calories_per_gram() * self.grams_consumed
    }
}

/// Entries logged during one "calculate consumption" interaction.
#[derive(Debug, Default)]
pub struct ConsumptionSession<'a> {
    entries: Vec<ConsumptionEntry<'a>>,
}

impl<'a> ConsumptionSession<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` in the catalog, record the entry and return its calorie contribution.
    ///
    /// Nothing is recorded when the lookup or the quantity is rejected.
    pub fn log(&mut self, catalog: &'a Catalog, name: &str, grams_consumed: f64) -> Result<f64> {
        let food = catalog.find_by_name(name)?;
        let entry = ConsumptionEntry::new(food, grams_consumed)?;
        let calories = entry.calories();

        tracing::debug!(
            food = food.name(),
            grams = grams_consumed,
            calories,
            "logged consumption"
        );

        self.entries.push(entry);
        Ok(calories)
    }

    pub fn total(&self) -> f64 {
        total_calories(&self.entries)
    }

    pub fn entries(&self) -> &[ConsumptionEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> FoodRecord {
        FoodRecord::new("Banana", 118.0, 105.0, "Fruit").unwrap()
    }

    #[test]
    fn test_identity_at_reference_point() {
        let food = banana();
        let cal = calories_for(&food, food.reference_grams()).unwrap();
        assert!((cal - food.reference_calories()).abs() < 1e-9);
    }

    #[test]
    fn test_half_banana() {
        let cal = calories_for(&banana(), 59.0).unwrap();
        assert!((cal - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_and_negative_grams() {
        assert_eq!(calories_for(&banana(), 0.0).unwrap(), 0.0);
        assert!(matches!(
            calories_for(&banana(), -5.0),
            Err(CalorieError::InvalidInput(_))
        ));
        assert!(calories_for(&banana(), f64::NAN).is_err());
    }

    #[test]
    fn test_parse_grams() {
        assert_eq!(parse_grams(" 250 ").unwrap(), 250.0);
        assert_eq!(parse_grams("0").unwrap(), 0.0);
        assert!(parse_grams("-1").is_err());
        assert!(parse_grams("a handful").is_err());
    }

    #[test]
    fn test_empty_total() {
        assert_eq!(total_calories(&[]), 0.0);
        assert_eq!(ConsumptionSession::new().total(), 0.0);
    }

    #[test]
    fn test_session_log() {
        let catalog = Catalog::new(vec![
            banana(),
            FoodRecord::new("Rice", 100.0, 130.0, "Grains").unwrap(),
        ]);
        let mut session = ConsumptionSession::new();

        let cal = session.log(&catalog, "BANANA", 118.0).unwrap();
        assert!((cal - 105.0).abs() < 1e-9);
        session.log(&catalog, "rice", 200.0).unwrap();

        assert_eq!(session.len(), 2);
        assert!((session.total() - 365.0).abs() < 1e-9);
    }

    #[test]
    fn test_session_rejections_leave_no_entry() {
        let catalog = Catalog::new(vec![banana()]);
        let mut session = ConsumptionSession::new();

        assert!(matches!(
            session.log(&catalog, "doesnotexist", 10.0),
            Err(CalorieError::FoodNotFound(_))
        ));
        assert!(matches!(
            session.log(&catalog, "banana", -5.0),
            Err(CalorieError::InvalidInput(_))
        ));
        assert!(session.is_empty());
    }

    #[test]
    fn test_session_total_stays_finite() {
        assert!(FoodRecord::new("Air", 0.0, 100.0, "None").is_err());
        assert!(FoodRecord::new("Air", -50.0, 100.0, "None").is_err());

        let catalog = Catalog::new(vec![
            banana(),
            FoodRecord::new("Water", 250.0, 0.0, "Drinks").unwrap(),
        ]);
        let mut session = ConsumptionSession::new();
        session.log(&catalog, "water", 10.0).unwrap();
        session.log(&catalog, "banana", 10.0).unwrap();

        assert!(session.total().is_finite());
        assert!(session.entries().iter().all(|e| e.calories() >= 0.0));
    }
}
