use serde::Serialize;

use crate::calculator::constants::*;
use crate::error::Result;
use crate::models::{ActivityLevel, BodyProfile, DietGoal, Gender};

/// Result of the profile -> BMR -> TDEE -> goal pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub bmr: f64,
    pub tdee: f64,
    pub adjusted_tdee: f64,
    pub goal: DietGoal,
}

/// Basal metabolic rate in kcal/day.
pub fn calculate_bmr(profile: &BodyProfile) -> f64 {
    let weight = profile.weight_kg();
    let height = profile.height_cm();
    let age = f64::from(profile.age());

    match profile.gender() {
        Gender::Male => {
            MALE_BMR_BASE + MALE_BMR_WEIGHT * weight + MALE_BMR_HEIGHT * height
                - MALE_BMR_AGE * age
        }
        Gender::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_WEIGHT * weight + FEMALE_BMR_HEIGHT * height
                - FEMALE_BMR_AGE * age
        }
    }
}

/// Total daily energy expenditure for an activity level in 1..=5.
///
/// Levels outside that range are rejected rather than treated as sedentary.
pub fn calculate_tdee(bmr: f64, activity_level: u8) -> Result<f64> {
    let level = ActivityLevel::try_from(activity_level)?;
    Ok(bmr * level.factor())
}

/// Shift TDEE by the fixed goal offset.
pub fn apply_goal(tdee: f64, goal: DietGoal) -> f64 {
    match goal {
        DietGoal::Standard => tdee,
        DietGoal::WeightGain => tdee + GOAL_CALORIE_OFFSET,
        DietGoal::WeightLoss => tdee - GOAL_CALORIE_OFFSET,
    }
}

/// Run the full recommendation pipeline for one profile.
pub fn recommend(profile: &BodyProfile, goal: DietGoal) -> Recommendation {
    let bmr = calculate_bmr(profile);
    let tdee = bmr * profile.activity_level().factor();
    let adjusted_tdee = apply_goal(tdee, goal);

    tracing::debug!(bmr, tdee, adjusted_tdee, ?goal, "computed recommendation");

    Recommendation {
        bmr,
        tdee,
        adjusted_tdee,
        goal,
    }
}
