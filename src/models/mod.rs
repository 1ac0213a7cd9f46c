mod food;
mod profile;

pub use food::FoodRecord;
pub(crate) use food::normalize_name;
pub use profile::{parse_age, parse_measurement, ActivityLevel, BodyProfile, DietGoal, Gender};
