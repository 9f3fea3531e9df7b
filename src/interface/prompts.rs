use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};

use crate::calculator::{
    bmi, estimate_body_fat_from_bmi, estimate_calorie_needs, validate_body_fat_percentage,
    validate_calorie_target, validate_weight, MAX_DAILY_CALORIES, MIN_DAILY_CALORIES,
};
use crate::catalog::Catalog;
use crate::error::{RecompError, Result};
use crate::models::{ActivityLevel, BodyCompositionInput, Gender, SupplementRecord, TimeSlot};

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| RecompError::InvalidInput(format!("Invalid number: {}", input.trim())))
}

/// Prompt until a number is entered, re-asking on parse errors.
fn prompt_number_retry(prompt: &str, default: f64) -> Result<f64> {
    loop {
        match prompt_number(prompt, default) {
            Ok(value) => return Ok(value),
            Err(RecompError::InvalidInput(msg)) => println!("{}", msg),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt for a selection from `options`.
fn prompt_select<T: ToString>(prompt: &str, options: &[T], default: usize) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?)
}

/// Step 1: current stats. Body fat can be estimated from BMI.
pub fn prompt_stats(input: &mut BodyCompositionInput) -> Result<()> {
    input.weight = prompt_number_retry("Current weight (lbs)", input.weight)?;
    if !validate_weight(input.weight) {
        println!("Warning: {} lbs looks unusual; double-check the value.", input.weight);
    }

    input.height_feet = prompt_number_retry("Height (feet)", input.height_feet)?;
    input.height_inches = prompt_number_retry("Height (inches)", input.height_inches)?;
    input.age = prompt_number_retry("Age", input.age as f64)?.max(0.0).round() as u32;

    let genders = ["Male", "Female"];
    let current = if input.gender == Gender::Female { 1 } else { 0 };
    input.gender = match prompt_select("Gender", &genders, current)? {
        1 => Gender::Female,
        _ => Gender::Male,
    };

    let height = input.total_height_inches();
    if height > 0.0 && input.weight > 0.0 && prompt_yes_no("Estimate body fat from BMI?", false)? {
        let estimate = estimate_body_fat_from_bmi(bmi(input.weight, height), input.age, input.gender);
        // One decimal, as shown to the user
        input.body_fat = (estimate * 10.0).round() / 10.0;
        println!("Estimated body fat: {}% (rough population estimate)", input.body_fat);
    } else {
        input.body_fat = prompt_number_retry("Current body fat (%)", input.body_fat)?;
    }
    if !validate_body_fat_percentage(input.body_fat) {
        println!("Warning: {}% body fat is outside the usual range.", input.body_fat);
    }

    Ok(())
}

/// Step 2: goal lean mass and target body fat.
pub fn prompt_goals(input: &mut BodyCompositionInput) -> Result<()> {
    input.desired_lean_mass_pct = prompt_number_retry(
        "Goal lean mass (% of current, 100 = keep all)",
        input.desired_lean_mass_pct,
    )?;
    input.desired_body_fat = prompt_number_retry("Target body fat (%)", input.desired_body_fat)?;
    Ok(())
}

/// Step 3: weekly loss rate.
pub fn prompt_timeline(input: &mut BodyCompositionInput) -> Result<()> {
    input.weekly_weight_loss =
        prompt_number_retry("Weekly weight loss (lbs/week)", input.weekly_weight_loss)?;
    Ok(())
}

/// Prompt for a calorie target within the accepted range.
pub fn prompt_calories(default: f64) -> Result<f64> {
    loop {
        let calories = prompt_number_retry("Daily calories", default)?;
        if calories > MAX_DAILY_CALORIES {
            println!("Daily calories must be at most {:.0}", MAX_DAILY_CALORIES);
            continue;
        }
        match validate_calorie_target(calories) {
            Ok(()) => return Ok(calories),
            Err(e) => println!("{}", e),
        }
    }
}

/// Step 4: activity level, calorie target and the preferred split.
pub fn prompt_nutrition(input: &mut BodyCompositionInput) -> Result<()> {
    if !prompt_yes_no("Set a daily calorie target for macro planning?", true)? {
        input.daily_calories = None;
        return Ok(());
    }

    let levels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.description()).collect();
    let current = ActivityLevel::ALL
        .iter()
        .position(|l| *l == input.activity_level)
        .unwrap_or(0);
    input.activity_level = ActivityLevel::ALL[prompt_select("Activity level", &levels, current)?];

    let mut default = input.daily_calories.unwrap_or(2000.0);
    if input.weight > 0.0 {
        let deficit = prompt_yes_no("Estimate calories with a deficit for fat loss?", true)?;
        default = estimate_calorie_needs(input.weight, input.activity_level, deficit)
            .round()
            .clamp(MIN_DAILY_CALORIES, MAX_DAILY_CALORIES);
        println!("Estimated daily calories: {:.0}", default);
    }
    input.daily_calories = Some(prompt_calories(default)?);

    println!("Preferred macro split (percent of calories):");
    input.split.protein = prompt_number_retry("  Protein %", input.split.protein)?;
    input.split.fat = prompt_number_retry("  Fat %", input.split.fat)?;
    input.split.carbs = prompt_number_retry("  Carbs %", input.split.carbs)?;
    let total = input.split.total();
    if (total - 100.0).abs() > f64::EPSILON {
        println!("Note: split totals {}%, not 100%.", total);
    }

    Ok(())
}

/// Collect a complete input snapshot, starting from `input`.
pub fn collect_body_input(mut input: BodyCompositionInput) -> Result<BodyCompositionInput> {
    println!("--- Step 1: Current Stats ---");
    prompt_stats(&mut input)?;
    println!("--- Step 2: Goals ---");
    prompt_goals(&mut input)?;
    println!("--- Step 3: Timeline ---");
    prompt_timeline(&mut input)?;
    println!("--- Step 4: Nutrition ---");
    prompt_nutrition(&mut input)?;
    Ok(input)
}

/// Prompt for a supplement name with fuzzy matching.
///
/// Returns `None` when the user enters nothing or rejects every candidate.
pub fn prompt_supplement(catalog: &Catalog) -> Result<Option<&'static SupplementRecord>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Supplement name (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(record) = catalog.get(input) {
            return Ok(Some(record));
        }

        let candidates = catalog.fuzzy_matches(input);

        if candidates.is_empty() {
            println!("No matching supplement found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let record = candidates[0];
            if prompt_yes_no(&format!("Did you mean '{}'?", record.name), true)? {
                return Ok(Some(record));
            }
            continue;
        }

        let options: Vec<&str> = candidates.iter().take(5).map(|r| r.name).collect();
        let mut selection_options = options.clone();
        selection_options.push("None of these");

        let selection = prompt_select("Which did you mean?", &selection_options, 0)?;
        if selection < options.len() {
            return Ok(Some(candidates[selection]));
        }
    }
}

/// Prompt for a time slot, defaulting to the supplement's best timing.
pub fn prompt_slot(default: TimeSlot) -> Result<TimeSlot> {
    let titles: Vec<&str> = TimeSlot::ALL.iter().map(|s| s.title()).collect();
    let current = TimeSlot::ALL.iter().position(|s| *s == default).unwrap_or(0);
    Ok(TimeSlot::ALL[prompt_select("Time slot", &titles, current)?])
}

/// Prompt for free text; may be empty.
pub fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for a free-text goal description.
pub fn prompt_scenario() -> Result<String> {
    prompt_text("Describe your goal (e.g. 'better focus', 'sleep and recovery')")
}

/// Prompt for an output path.
pub fn prompt_path(prompt: &str, default: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(PathBuf::from(input.trim()))
}

/// Prompt for one entry of a menu.
pub fn prompt_menu(prompt: &str, items: &[&str]) -> Result<usize> {
    prompt_select(prompt, items, 0)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
