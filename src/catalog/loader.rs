use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{CalorieError, Result};
use crate::models::FoodRecord;

/// Columns every catalog source must provide (matched case-insensitively).
pub const REQUIRED_COLUMNS: [&str; 4] = ["food", "grams", "calories", "category"];

/// One CSV row before numeric parsing.
#[derive(Debug, Deserialize)]
struct RawFoodRow {
    food: String,
    grams: String,
    calories: String,
    category: String,
}

/// Load the catalog from a CSV file.
///
/// The whole load fails on the first bad record; the error names the file and line.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let file = File::open(path).map_err(|e| {
        CalorieError::data_source(&source_name, format!("cannot open catalog: {}", e))
    })?;

    let catalog = load_catalog_from_reader(file, &source_name)?;
    tracing::info!("Loaded {} foods from {}", catalog.len(), source_name);
    Ok(catalog)
}

/// Load the catalog from any CSV reader. `source_name` is only used in error messages.
pub fn load_catalog_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Catalog> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: StringRecord = rdr
        .headers()
        .map_err(|e| CalorieError::data_source(location(source_name, 1), e.to_string()))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CalorieError::data_source(
                location(source_name, 1),
                format!("missing required column '{}'", column),
            ));
        }
    }

    let mut foods = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            CalorieError::data_source(location(source_name, line), e.to_string())
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let food = parse_record(&record, &headers).map_err(|message| {
            CalorieError::data_source(location(source_name, line), message)
        })?;
        foods.push(food);
    }

    Ok(Catalog::new(foods))
}

fn parse_record(
    record: &StringRecord,
    headers: &StringRecord,
) -> std::result::Result<FoodRecord, String> {
    let raw: RawFoodRow = record
        .deserialize(Some(headers))
        .map_err(|e| format!("malformed record: {}", e))?;

    let grams = parse_grouped_number(&raw.grams)
        .ok_or_else(|| format!("'{}': invalid grams value '{}'", raw.food, raw.grams))?;
    let calories = parse_grouped_number(&raw.calories)
        .ok_or_else(|| format!("'{}': invalid calories value '{}'", raw.food, raw.calories))?;

    FoodRecord::new(raw.food, grams, calories, raw.category).map_err(|e| match e {
        CalorieError::InvalidInput(message) => message,
        other => other.to_string(),
    })
}

/// Parse a number that may carry comma group separators, e.g. "1,000".
pub fn parse_grouped_number(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn location(source_name: &str, line: u64) -> String {
    format!("{}:{}", source_name, line)
}
