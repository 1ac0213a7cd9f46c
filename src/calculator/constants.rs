// ─────────────────────────────────────────────────────────────────────────────
// Basal metabolic rate (revised Harris-Benedict coefficients)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_WEIGHT: f64 = 13.397;
pub const MALE_BMR_HEIGHT: f64 = 4.799;
pub const MALE_BMR_AGE: f64 = 5.677;

pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_BMR_WEIGHT: f64 = 9.247;
pub const FEMALE_BMR_HEIGHT: f64 = 3.098;
pub const FEMALE_BMR_AGE: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Diet goals
// ─────────────────────────────────────────────────────────────────────────────

/// Daily kcal added for weight gain or removed for weight loss (~0.45 kg/week).
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

/// Number of close names offered when a food lookup misses.
pub const MAX_SUGGESTIONS: usize = 5;
