use crate::calculator::{bmi_category, protein_sources, Guideline};
use crate::catalog::{COMMANDMENTS, TRACKER_STEPS};
use crate::models::{
    BodyCompositionInput, MacroResult, MacroSplit, ScenarioRecommendation, SupplementRecord,
    TimeSlot,
};
use crate::state::{Projection, Stack};

/// Display the body composition projection.
pub fn display_projection(input: &BodyCompositionInput, projection: &Projection) {
    let r = &projection.composition;

    println!();
    println!("=== Body Composition ===");
    println!();
    println!("  Current weight:     {:>7.1} lbs at {}% body fat", input.weight, input.body_fat);
    println!("  Current lean mass:  {:>7.1} lbs", r.current_lean_mass);
    println!("  Current fat mass:   {:>7.1} lbs", r.current_fat_mass);
    if let Some(bmi) = projection.bmi {
        println!("  BMI:                {:>7.1} ({})", bmi, bmi_category(bmi));
    }
    println!();
    println!("--- Goal ({}% body fat) ---", input.desired_body_fat);
    println!("  Goal weight:        {:>7.1} lbs", r.goal_weight);
    println!(
        "  Goal lean mass:     {:>7.1} lbs ({}% of current)",
        r.goal_lean_mass, input.desired_lean_mass_pct
    );
    println!("  Goal fat mass:      {:>7.1} lbs", r.goal_fat_mass);
    println!();
    println!("--- Timeline ---");
    if r.weight_to_lose < 0.0 {
        println!("  Weight to gain:     {:>7.1} lbs", -r.weight_to_lose);
    } else {
        println!("  Weight to lose:     {:>7.1} lbs", r.weight_to_lose);
    }
    println!("  Fat to lose:        {:>7.1} lbs", r.fat_to_lose());
    println!(
        "  At {} lbs/week:     {} weeks (~{} months)",
        input.weekly_weight_loss,
        r.weeks_to_goal,
        r.months_to_goal()
    );
    println!();
}

/// Display daily macro targets next to the configured split.
pub fn display_macros(macros: &MacroResult, chosen: &MacroSplit) {
    println!("=== Daily Macros ({} kcal) ===", macros.total_calories);
    println!();
    println!(
        "  {:<8} {:>5} {:>7} {:>6}",
        "Macro", "Grams", "kcal", "Share"
    );
    let rows = [
        ("Protein", macros.protein, macros.protein_calories, macros.protein_percentage),
        ("Fat", macros.fat, macros.fat_calories, macros.fat_percentage),
        ("Carbs", macros.carbs, macros.carb_calories, macros.carb_percentage),
    ];
    for (name, grams, kcal, pct) in rows {
        println!("  {:<8} {:>4}g {:>7} {:>5}%", name, grams, kcal, pct);
    }
    println!();

    if macros.carbs_floored {
        println!("  Note: protein and fat alone exceed the calorie target; carbs set to 0.");
    }
    let realized = macros.realized_split();
    if realized != *chosen {
        println!(
            "  Realized split {}/{}/{} differs from your chosen split {}/{}/{}.",
            realized.protein, realized.fat, realized.carbs, chosen.protein, chosen.fat, chosen.carbs
        );
        println!("  Macros come from the goal-weight formula; the chosen split is advisory.");
    }
    println!();
}

/// Display guideline messages.
pub fn display_guidelines(guidelines: &[Guideline], title: &str) {
    if guidelines.is_empty() {
        return;
    }
    println!("=== {} ===", title);
    println!();
    for guideline in guidelines {
        println!("  {}", guideline);
    }
    println!();
}

/// Display serving sizes that cover a protein target.
pub fn display_protein_guide(protein_target: u32) {
    println!("--- Protein Sources for {}g/day (2-6-8-10 Hack) ---", protein_target);
    for source in protein_sources(protein_target as f64) {
        println!("  {:<15} {:>10}  ({})", source.name, source.amount, source.protein);
    }
    println!();
}

/// Display a list of supplements, one per line.
pub fn display_supplement_list(records: &[&SupplementRecord], title: &str) {
    if records.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, records.len());
    println!();

    let width = records.iter().map(|r| r.name.len()).max().unwrap_or(10);
    for record in records {
        println!(
            "  {:<width$}  [{}] {}",
            record.name,
            record.category,
            record.description,
            width = width
        );
    }
    println!();
}

/// Display one supplement in full.
pub fn display_supplement(record: &SupplementRecord) {
    println!();
    println!("=== {} ({}) ===", record.name, record.category);
    println!("{}", record.description);
    println!();
    println!("  Dosage: {}", record.dosage);
    println!("  Timing: {} (best: {})", record.timing, record.best_timing);
    if !record.benefits.is_empty() {
        println!("  Benefits:");
        for b in record.benefits {
            println!("    + {}", b);
        }
    }
    if !record.warnings.is_empty() {
        println!("  Warnings:");
        for w in record.warnings {
            println!("    ! {}", w);
        }
    }
    if !record.stacks_with.is_empty() {
        println!("  Stacks with: {}", record.stacks_with.join(", "));
    }
    println!();
}

/// Display a scenario recommendation and the catalog entries it resolves to.
pub fn display_recommendation(rec: &ScenarioRecommendation, resolved: &[&SupplementRecord]) {
    println!();
    println!("=== {} ===", rec.title);
    println!("{}", rec.description);
    println!();
    for record in resolved {
        println!("  - {:<22} {} ({})", record.name, record.dosage, record.best_timing);
    }
    println!();
    println!("Why: {}", rec.reasoning);
    println!();
}

/// Display the stack grouped by time slot.
pub fn display_stack(stack: &Stack) {
    println!();
    println!("=== Your Stack ({} items) ===", stack.total_items());

    for slot in TimeSlot::ALL {
        let items = stack.slot(slot);
        println!();
        println!("--- {} ---", slot.title());
        if items.is_empty() {
            println!("  (empty)");
        }
        for item in items {
            println!("  {} - {}", item.supplement.name, item.dosage);
        }
    }
    println!();
}

/// Display the rules shown before the supplement tools unlock.
pub fn display_commandments() {
    println!();
    println!("=== The Supplementation Commandments ===");
    println!();
    for (i, rule) in COMMANDMENTS.iter().enumerate() {
        println!("  {}. {}", i + 1, rule);
    }
    println!();
    println!("--- How to Track Your Supplements ---");
    for (i, (title, body)) in TRACKER_STEPS.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, title, body);
    }
    println!();
}
