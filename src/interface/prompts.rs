use dialoguer::{Confirm, Input, Select};

use crate::calculator::{parse_grams, MAX_SUGGESTIONS};
use crate::catalog::Catalog;
use crate::error::{CalorieError, Result};
use crate::models::{
    parse_age, parse_measurement, ActivityLevel, BodyProfile, DietGoal, FoodRecord, Gender,
};

/// Ask until `parse` accepts the input. Non-recoverable errors are returned.
fn prompt_until_valid<T>(prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;

        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_recoverable() => println!("{}. Please try again.", e),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt for a catalog food, offering close names when the exact name is unknown.
pub fn prompt_food(catalog: &Catalog) -> Result<&FoodRecord> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter the name of the food item you consumed")
            .interact_text()?;

        let name = input.trim();

        match catalog.find_by_name(name) {
            Ok(food) => return Ok(food),
            Err(CalorieError::FoodNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let candidates = catalog.suggest(name, MAX_SUGGESTIONS);

        if candidates.is_empty() {
            println!("'{}' is not a valid food item. Please try again.", name);
            continue;
        }

        if candidates.len() == 1 {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", candidates[0]))
                .default(true)
                .interact()?;

            if confirm {
                return catalog.find_by_name(candidates[0]);
            }
        } else {
            let mut selection_options: Vec<String> =
                candidates.iter().map(|c| c.to_string()).collect();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < candidates.len() {
                return catalog.find_by_name(candidates[selection]);
            }
        }
    }
}

/// Prompt for a non-negative gram quantity.
pub fn prompt_grams(food_name: &str) -> Result<f64> {
    prompt_until_valid(
        &format!("How many grams of {} did you consume?", food_name),
        parse_grams,
    )
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a diet goal, preselecting the current one.
pub fn prompt_diet_goal(current: DietGoal) -> Result<DietGoal> {
    let labels: Vec<&str> = DietGoal::ALL.iter().map(|g| g.label()).collect();
    let default = DietGoal::ALL
        .iter()
        .position(|g| *g == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What are your diet goals?")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(DietGoal::ALL[selection])
}

/// Prompt for the body metrics behind a recommendation.
pub fn prompt_body_profile() -> Result<BodyProfile> {
    let genders = [Gender::Male, Gender::Female];
    let gender_labels = ["Male", "Female"];
    let gender = genders[Select::new()
        .with_prompt("Are you male or female?")
        .items(&gender_labels)
        .default(0)
        .interact()?];

    let age = prompt_until_valid("How old are you?", parse_age)?;
    let height_cm = prompt_until_valid("How tall are you? (in cm)", |s| {
        parse_measurement("height", s)
    })?;
    let weight_kg = prompt_until_valid("What's your current weight? (in kg)", |s| {
        parse_measurement("weight", s)
    })?;

    let activity_labels: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{}. {}", level.level(), level.description()))
        .collect();
    let activity_level = ActivityLevel::ALL[Select::new()
        .with_prompt("Select your activity level")
        .items(&activity_labels)
        .default(0)
        .interact()?];

    BodyProfile::new(gender, age, height_cm, weight_kg, activity_level)
}
