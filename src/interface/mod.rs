pub mod prompts;
pub mod render;

pub use prompts::{
    collect_body_input, prompt_calories, prompt_goals, prompt_menu, prompt_nutrition, prompt_path,
    prompt_scenario, prompt_slot, prompt_stats, prompt_supplement, prompt_text, prompt_timeline,
    prompt_yes_no,
};
pub use render::{
    display_commandments, display_guidelines, display_macros, display_projection,
    display_protein_guide, display_recommendation, display_stack, display_supplement,
    display_supplement_list,
};
