use std::path::Path;

use clap::Parser;

use calorie_tracker_rs::calculator::{parse_grams, recommend, ConsumptionSession};
use calorie_tracker_rs::catalog::load_catalog;
use calorie_tracker_rs::cli::{parse_item, Cli, Command};
use calorie_tracker_rs::config::Config;
use calorie_tracker_rs::error::Result;
use calorie_tracker_rs::interface::{
    display_consumption_summary, display_food_list, display_recommendation, run_menu,
};
use calorie_tracker_rs::logging;
use calorie_tracker_rs::models::{ActivityLevel, BodyProfile, DietGoal, FoodRecord};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_with_level("debug");
    } else {
        logging::init();
    }

    let config = Config::load(cli.config.as_deref())?;
    let default_goal = config.diet_goal()?;
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog.path.clone());

    match cli.command.unwrap_or_default() {
        Command::Menu => cmd_menu(&catalog_path, default_goal),
        Command::Foods { category } => cmd_foods(&catalog_path, category.as_deref()),
        Command::Consume { items } => cmd_consume(&catalog_path, &items),
        Command::Recommend {
            gender,
            age,
            height,
            weight,
            activity,
            goal,
            json,
        } => {
            let goal = match goal {
                Some(goal) => goal.parse()?,
                None => default_goal,
            };
            let profile = BodyProfile::new(
                gender.parse()?,
                age,
                height,
                weight,
                ActivityLevel::try_from(activity)?,
            )?;
            cmd_recommend(&profile, goal, json)
        }
    }
}

/// Interactive menu over a catalog loaded once for the whole session.
fn cmd_menu(catalog_path: &Path, goal: DietGoal) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    println!("Loaded {} foods", catalog.len());
    run_menu(&catalog, goal)
}

/// Print the catalog, optionally limited to one category.
fn cmd_foods(catalog_path: &Path, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    match category {
        Some(category) => {
            let foods = catalog.by_category(category);
            display_food_list(&foods, category);
        }
        None => {
            let foods: Vec<&FoodRecord> = catalog.iter().collect();
            display_food_list(&foods, "Food items");
            println!("Categories: {}", catalog.categories().join(", "));
        }
    }

    Ok(())
}

/// Log every NAME=GRAMS pair and report the total; stops at the first rejected pair.
fn cmd_consume(catalog_path: &Path, items: &[String]) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let mut session = ConsumptionSession::new();

    for item in items {
        let (name, grams) = parse_item(item)?;
        let grams = parse_grams(grams)?;
        session.log(&catalog, name, grams)?;
    }

    display_consumption_summary(&session);
    Ok(())
}

/// Print BMR, TDEE and the adjusted target.
fn cmd_recommend(profile: &BodyProfile, goal: DietGoal, json: bool) -> Result<()> {
    let rec = recommend(profile, goal);

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        display_recommendation(&rec);
    }

    Ok(())
}
