pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;

pub use catalog::{load_catalog, Catalog};
pub use error::{CalorieError, Result};
pub use models::{ActivityLevel, BodyProfile, DietGoal, FoodRecord, Gender};
