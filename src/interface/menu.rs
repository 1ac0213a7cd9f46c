use dialoguer::Select;

use crate::calculator::{recommend, ConsumptionSession};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::interface::prompts::{
    prompt_body_profile, prompt_diet_goal, prompt_food, prompt_grams, prompt_yes_no,
};
use crate::interface::render::{
    display_consumption_summary, display_entry, display_food_list, display_recommendation,
};
use crate::models::{DietGoal, FoodRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    DisplayFoods,
    CalculateConsumption,
    SetDietGoal,
    Recommend,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 5] = [
        MenuAction::DisplayFoods,
        MenuAction::CalculateConsumption,
        MenuAction::SetDietGoal,
        MenuAction::Recommend,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::DisplayFoods => "Display list of food items with their calories",
            MenuAction::CalculateConsumption => "Calculate my daily calorie consumption",
            MenuAction::SetDietGoal => "Set diet goals",
            MenuAction::Recommend => "Calculate my recommended calorie intake",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Run the interactive menu until the user exits.
///
/// The diet goal chosen here lasts only for this menu session.
pub fn run_menu(catalog: &Catalog, initial_goal: DietGoal) -> Result<()> {
    let mut goal = initial_goal;
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    println!("Welcome!");

    loop {
        let selection = Select::new()
            .with_prompt(format!("Daily Calorie Consumption Calculator (goal: {})", goal))
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuAction::ALL[selection] {
            MenuAction::DisplayFoods => {
                let foods: Vec<&FoodRecord> = catalog.iter().collect();
                display_food_list(&foods, "Food items");
            }
            MenuAction::CalculateConsumption => run_consumption(catalog)?,
            MenuAction::SetDietGoal => {
                goal = prompt_diet_goal(goal)?;
                tracing::info!(?goal, "diet goal set for session");
                println!("Selected diet goal: {}", goal);
            }
            MenuAction::Recommend => {
                let profile = prompt_body_profile()?;
                display_recommendation(&recommend(&profile, goal));
            }
            MenuAction::Exit => {
                println!("You are leaving the app. Stay healthy!");
                return Ok(());
            }
        }
    }
}

/// Log foods until the user stops, then report the total.
fn run_consumption(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        println!("The food catalog is empty.");
        return Ok(());
    }

    let mut session = ConsumptionSession::new();

    loop {
        let food = prompt_food(catalog)?;
        let grams = prompt_grams(food.name())?;
        let calories = session.log(catalog, food.name(), grams)?;
        display_entry(food.name(), grams, calories);

        if !prompt_yes_no("Do you want to enter a new item?", true)? {
            break;
        }
    }

    display_consumption_summary(&session);
    Ok(())
}
