mod menu;
pub mod prompts;
pub mod render;

pub use menu::run_menu;
pub use prompts::{
    prompt_body_profile, prompt_diet_goal, prompt_food, prompt_grams, prompt_yes_no,
};
pub use render::{
    display_consumption_summary, display_entry, display_food_list, display_recommendation,
};
