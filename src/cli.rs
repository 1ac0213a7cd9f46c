use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{CalorieError, Result};

/// Calorie Tracker — log daily calorie consumption and compute a recommended intake.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV (overrides the config file; default data/food_catalog.csv).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu.
    Menu,

    /// List the food catalog.
    Foods {
        /// Only show foods in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Sum the calories of NAME=GRAMS pairs, e.g. `consume banana=59 "brown rice=200"`.
    Consume {
        #[arg(required = true, value_name = "NAME=GRAMS")]
        items: Vec<String>,
    },

    /// Compute BMR, TDEE and the goal-adjusted daily intake.
    Recommend {
        /// M or F.
        #[arg(long)]
        gender: String,

        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Height in centimetres.
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Weight in kilograms.
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Activity level, 1 (sedentary) to 5 (extra active).
        #[arg(long)]
        activity: u8,

        /// Diet goal: S, WG or WL. Defaults to the configured goal.
        #[arg(long)]
        goal: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu
    }
}

/// Split a `NAME=GRAMS` argument at its last `=`.
pub fn parse_item(arg: &str) -> Result<(&str, &str)> {
    match arg.rsplit_once('=') {
        Some((name, grams)) if !name.trim().is_empty() => Ok((name.trim(), grams.trim())),
        _ => Err(CalorieError::InvalidInput(format!(
            "expected NAME=GRAMS, got '{}'",
            arg
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("banana=59").unwrap(), ("banana", "59"));
        assert_eq!(parse_item(" brown rice = 200 ").unwrap(), ("brown rice", "200"));
        assert!(parse_item("banana").is_err());
        assert!(parse_item("=59").is_err());
    }

    #[test]
    fn test_default_command_is_menu() {
        let cli = Cli::try_parse_from(["calorie_tracker"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Menu));
    }

    #[test]
    fn test_recommend_args() {
        let cli = Cli::try_parse_from([
            "calorie_tracker",
            "recommend",
            "--gender",
            "m",
            "--age",
            "30",
            "--height",
            "180",
            "--weight",
            "80",
            "--activity",
            "3",
            "--goal",
            "wl",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Recommend { age, activity, goal, json, .. }) => {
                assert_eq!(age, 30);
                assert_eq!(activity, 3);
                assert_eq!(goal.as_deref(), Some("wl"));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
