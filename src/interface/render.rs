use crate::calculator::{ConsumptionSession, Recommendation};
use crate::models::{DietGoal, FoodRecord};

/// Display foods in an aligned table.
pub fn display_food_list(foods: &[&FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let name_width = foods
        .iter()
        .map(|f| f.name().chars().count())
        .max()
        .unwrap_or(4)
        .max("Food".len());

    println!(
        "  {:<width$}  {:>8}  {:>8}  {}",
        "Food",
        "Grams",
        "Calories",
        "Category",
        width = name_width
    );
    println!("  {}", "-".repeat(name_width + 30));

    for food in foods {
        println!(
            "  {:<width$}  {:>8}  {:>8}  {}",
            food.name(),
            food.reference_grams(),
            food.reference_calories(),
            food.category(),
            width = name_width
        );
    }

    println!();
}

/// Display one logged entry's contribution.
pub fn display_entry(food_name: &str, grams: f64, calories: f64) {
    println!("  {} - {} g => {:.2} kcal", food_name, grams, calories);
}

/// Display the running total for a session.
pub fn display_consumption_summary(session: &ConsumptionSession<'_>) {
    println!();
    println!("--- Consumption ---");
    for entry in session.entries() {
        display_entry(entry.food().name(), entry.grams_consumed(), entry.calories());
    }
    println!("Total items: {}", session.len());
    println!("Total calories consumed: {:.2}", session.total());
    println!();
}

/// Display BMR, TDEE and the goal-adjusted target.
pub fn display_recommendation(rec: &Recommendation) {
    println!();
    match rec.goal {
        DietGoal::Standard => println!("Your diet goals are set to standard."),
        DietGoal::WeightGain => println!("Your diet goals are set to weight gain."),
        DietGoal::WeightLoss => println!("Your diet goals are set to weight loss."),
    }
    println!(
        "Your Basal Metabolic Rate (BMR) is {:.2} calories per day.",
        rec.bmr
    );
    println!(
        "Your Total Daily Energy Expenditure (TDEE) is approximately {:.2} calories per day.",
        rec.tdee
    );
    println!(
        "Recommended daily intake: {:.2} calories per day.",
        rec.adjusted_tdee
    );
    println!();
}
