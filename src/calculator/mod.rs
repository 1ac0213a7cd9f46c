pub mod constants;
pub mod consumption;
pub mod energy;

pub use constants::*;
pub use consumption::{
    calories_for, parse_grams, total_calories, ConsumptionEntry, ConsumptionSession,
};
pub use energy::{apply_goal, calculate_bmr, calculate_tdee, recommend, Recommendation};
