use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CalorieError, Result};

/// Selects the BMR formula branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = CalorieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            other => Err(CalorieError::InvalidInput(format!(
                "unrecognized gender '{}' (expected M or F)",
                other
            ))),
        }
    }
}

/// Activity level 1 (sedentary) through 5 (extra active).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary = 1,
    LightlyActive = 2,
    ModeratelyActive = 3,
    VeryActive = 4,
    ExtraActive = 5,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// TDEE multiplier applied to BMR.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => {
                "Lightly active (light exercise/sports 1-3 days a week)"
            }
            ActivityLevel::ModeratelyActive => {
                "Moderately active (moderate exercise/sports 3-5 days a week)"
            }
            ActivityLevel::VeryActive => "Very active (hard exercise/sports 6-7 days a week)",
            ActivityLevel::ExtraActive => {
                "Extra active (very hard exercise/sports & physical job or training twice a day)"
            }
        }
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = CalorieError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(ActivityLevel::Sedentary),
            2 => Ok(ActivityLevel::LightlyActive),
            3 => Ok(ActivityLevel::ModeratelyActive),
            4 => Ok(ActivityLevel::VeryActive),
            5 => Ok(ActivityLevel::ExtraActive),
            other => Err(CalorieError::InvalidInput(format!(
                "activity level must be between 1 and 5, got {}",
                other
            ))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CalorieError;

    fn from_str(s: &str) -> Result<Self> {
        let level: u8 = s.trim().parse().map_err(|_| {
            CalorieError::InvalidInput(format!("'{}' is not an activity level (1-5)", s.trim()))
        })?;
        ActivityLevel::try_from(level)
    }
}

/// Diet goal applied on top of TDEE. Absent means `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    #[default]
    Standard,
    WeightGain,
    WeightLoss,
}

impl DietGoal {
    pub const ALL: [DietGoal; 3] = [
        DietGoal::Standard,
        DietGoal::WeightGain,
        DietGoal::WeightLoss,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietGoal::Standard => "Standard",
            DietGoal::WeightGain => "Weight gain",
            DietGoal::WeightLoss => "Weight loss",
        }
    }
}

impl FromStr for DietGoal {
    type Err = CalorieError;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match compact.as_str() {
            "s" | "standard" => Ok(DietGoal::Standard),
            "wg" | "weightgain" => Ok(DietGoal::WeightGain),
            "wl" | "weightloss" => Ok(DietGoal::WeightLoss),
            _ => Err(CalorieError::InvalidInput(format!(
                "unrecognized diet goal '{}' (expected S, WG or WL)",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for DietGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body metrics for a single recommendation request.
///
/// Construct through [`BodyProfile::new`], which rejects non-positive or non-finite metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    gender: Gender,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
}

impl BodyProfile {
    pub fn new(
        gender: Gender,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
    ) -> Result<Self> {
        if age == 0 {
            return Err(CalorieError::InvalidInput(
                "age must be greater than 0".to_string(),
            ));
        }
        check_positive("height", height_cm)?;
        check_positive("weight", weight_kg)?;

        Ok(Self {
            gender,
            age,
            height_cm,
            weight_kg,
            activity_level,
        })
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalorieError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Parse a positive age in years.
pub fn parse_age(input: &str) -> Result<u32> {
    let age: u32 = input.trim().parse().map_err(|_| {
        CalorieError::InvalidInput(format!("'{}' is not a valid age", input.trim()))
    })?;
    if age == 0 {
        return Err(CalorieError::InvalidInput(
            "age must be greater than 0".to_string(),
        ));
    }
    Ok(age)
}

/// Parse a positive measurement (height in cm, weight in kg).
pub fn parse_measurement(field: &str, input: &str) -> Result<f64> {
    let value: f64 = input.trim().parse().map_err(|_| {
        CalorieError::InvalidInput(format!("'{}' is not a valid {}", input.trim(), field))
    })?;
    check_positive(field, value)?;
    Ok(value)
}
