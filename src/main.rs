use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use recomp_calc_rs::calculator::{
    bmi, bmi_category, estimate_body_fat_from_bmi, estimate_calorie_needs, guidelines,
};
use recomp_calc_rs::catalog::catalog;
use recomp_calc_rs::cli::{BodyArgs, Cli, Command};
use recomp_calc_rs::error::{RecompError, Result};
use recomp_calc_rs::export::{
    build_report, default_report_filename, write_catalog_csv, write_report,
};
use recomp_calc_rs::interface::{
    collect_body_input, display_commandments, display_guidelines, display_macros,
    display_projection, display_protein_guide, display_recommendation, display_stack,
    display_supplement, display_supplement_list, prompt_menu, prompt_path, prompt_scenario,
    prompt_slot, prompt_supplement, prompt_text, prompt_yes_no,
};
use recomp_calc_rs::models::{ActivityLevel, BodyCompositionInput, Gender};
use recomp_calc_rs::recommend::resolve;
use recomp_calc_rs::state::{load_input, save_input, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or_default() {
        Command::Wizard { input } => cmd_wizard(input.as_deref()),
        Command::Compose { body, json, save } => cmd_compose(&body, json, save.as_deref()),
        Command::Bmi {
            weight,
            feet,
            inches,
            age,
            gender,
        } => cmd_bmi(weight, feet * 12.0 + inches, age, gender),
        Command::Calories {
            weight,
            activity,
            deficit,
        } => cmd_calories(weight, ActivityLevel::parse(&activity), deficit),
        Command::Guidelines {
            protein,
            fat,
            carbs,
        } => cmd_guidelines(protein, fat, carbs),
        Command::Catalog {
            search,
            category,
            show,
            csv,
            acknowledge,
        } => cmd_catalog(&search, &category, show.as_deref(), csv.as_deref(), acknowledge),
        Command::Scenario {
            text,
            json,
            acknowledge,
        } => cmd_scenario(&text, json, acknowledge),
        Command::Export { body, output } => cmd_export(&body, output),
    }
}

/// Snapshot file (if any), then flags.
fn resolve_input(body: &BodyArgs) -> Result<BodyCompositionInput> {
    let mut input = match &body.input {
        Some(path) => load_input(path)?,
        None => BodyCompositionInput::default(),
    };
    body.apply(&mut input);
    Ok(input)
}

/// A session whose input passed validation.
fn valid_session(input: BodyCompositionInput) -> Result<Session> {
    let session = Session::new(input);
    if let Some(reason) = session.invalid_reason() {
        return Err(RecompError::InvalidInput(reason.to_string()));
    }
    Ok(session)
}

fn show_results(session: &Session) {
    let Some(projection) = session.projection() else {
        return;
    };
    let input = session.input();

    display_projection(input, projection);
    if let Some(macros) = &projection.macros {
        display_macros(macros, &input.split);
        display_protein_guide(macros.protein);
        display_guidelines(&projection.realized_guidelines(), "Guidelines for Your Macros");
    }
}

/// Interactive walk-through: stats, goals, timeline, nutrition, supplements, export.
fn cmd_wizard(input_path: Option<&Path>) -> Result<()> {
    let start = match input_path {
        Some(path) => load_input(path)?,
        None => BodyCompositionInput::default(),
    };

    let mut session = Session::new(collect_body_input(start)?);
    while let Some(reason) = session.invalid_reason() {
        println!();
        println!("Cannot compute results: {}", reason);
        if !prompt_yes_no("Re-enter your details?", true)? {
            return Ok(());
        }
        let next = collect_body_input(session.input().clone())?;
        session.set_input(next);
    }

    show_results(&session);

    println!("--- Step 5: Supplements ---");
    if prompt_yes_no("Open the supplement tools?", false)? {
        display_commandments();
        if prompt_yes_no("I have read and understand these guidelines", false)? {
            session.acknowledge_guidelines();
            supplement_tools(&mut session)?;
        } else {
            println!("Supplement tools stay locked.");
        }
    }

    println!("--- Step 6: Results ---");
    if prompt_yes_no("Export the analysis report?", true)? {
        let today = chrono::Local::now().date_naive();
        let path = prompt_path("Report path", &default_report_filename(today))?;
        if let Some(projection) = session.projection() {
            write_report(&build_report(session.input(), projection, today), &path)?;
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}

const MENU: [&str; 9] = [
    "Browse catalog",
    "Look up a supplement",
    "Analyze a goal",
    "Add supplement to stack",
    "Remove supplement from stack",
    "Add recommended stack",
    "View stack",
    "Clear stack",
    "Done",
];

/// Menu loop over the unlocked supplement tools. Lookup and input errors
/// are reported and the loop continues.
fn supplement_tools(session: &mut Session) -> Result<()> {
    loop {
        let outcome = match prompt_menu("Supplement tools", &MENU)? {
            0 => browse(session),
            1 => prompt_supplement(catalog()).map(|found| {
                if let Some(record) = found {
                    display_supplement(record);
                }
            }),
            2 => prompt_scenario().and_then(|text| {
                let rec = session.analyze(&text)?.clone();
                display_recommendation(&rec, &resolve(&rec, catalog()));
                Ok(())
            }),
            3 => match prompt_supplement(catalog())? {
                Some(record) => {
                    let slot = prompt_slot(record.best_timing.slot())?;
                    session.add_to_stack(record.name, slot).map(|()| {
                        println!("Added {} to {}", record.name, slot.title());
                    })
                }
                None => Ok(()),
            },
            4 => remove(session),
            5 => session.add_recommendation_to_stack().map(|added| {
                println!("Added {} supplements from the recommendation", added);
            }),
            6 => {
                display_stack(session.stack());
                Ok(())
            }
            7 => {
                if prompt_yes_no("Remove everything from the stack?", false)? {
                    session.clear_stack()?;
                    println!("Stack cleared.");
                }
                Ok(())
            }
            _ => return Ok(()),
        };

        match outcome {
            Ok(()) => {}
            Err(e @ (RecompError::InvalidInput(_) | RecompError::SupplementNotFound(_))) => {
                println!("{}", e);
            }
            Err(e) => return Err(e),
        }
    }
}

fn browse(session: &Session) -> Result<()> {
    let categories = catalog().categories();
    let category = categories[prompt_menu("Category", &categories)?];
    let search = prompt_text("Search (or press Enter for all)")?;

    let records = session.browse(search.trim(), category)?;
    display_supplement_list(&records, category);
    Ok(())
}

fn remove(session: &mut Session) -> Result<()> {
    let Some(record) = prompt_supplement(catalog())? else {
        return Ok(());
    };
    let slot = prompt_slot(record.best_timing.slot())?;
    let removed = session.remove_from_stack(record.name, slot)?;
    if removed == 0 {
        println!("{} is not in the {} slot", record.name, slot.title());
    } else {
        println!("Removed {} from {}", record.name, slot.title());
    }
    Ok(())
}

/// One-shot projection from flags and/or a snapshot file.
fn cmd_compose(body: &BodyArgs, json: bool, save: Option<&Path>) -> Result<()> {
    let input = resolve_input(body)?;
    if let Some(path) = save {
        save_input(path, &input)?;
    }

    let session = valid_session(input)?;

    if json {
        let Some(projection) = session.projection() else {
            return Ok(());
        };
        let advice: Vec<String> = projection
            .realized_guidelines()
            .iter()
            .map(|g| g.plain())
            .collect();
        let out = serde_json::json!({
            "input": session.input(),
            "projection": projection,
            "guidelines": advice,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        show_results(&session);
    }

    Ok(())
}

fn cmd_bmi(weight: f64, height_inches: f64, age: Option<u32>, gender: Gender) -> Result<()> {
    if weight <= 0.0 || height_inches <= 0.0 {
        return Err(RecompError::InvalidInput(
            "Weight and height must be greater than 0".to_string(),
        ));
    }

    let value = bmi(weight, height_inches);
    println!("BMI: {:.1} ({})", value, bmi_category(value));

    if let Some(age) = age {
        let estimate = estimate_body_fat_from_bmi(value, age, gender);
        println!(
            "Estimated body fat: {:.1}% (rough population estimate, not diagnostic)",
            estimate
        );
    }
    Ok(())
}

fn cmd_calories(weight: f64, level: ActivityLevel, deficit: bool) -> Result<()> {
    if weight <= 0.0 {
        return Err(RecompError::InvalidInput("Weight must be greater than 0".to_string()));
    }

    let calories = estimate_calorie_needs(weight, level, deficit);
    let label = if deficit { "fat-loss target" } else { "maintenance" };
    println!("{} ({}): {:.0} kcal/day", level.description(), label, calories);
    Ok(())
}

fn cmd_guidelines(protein: f64, fat: f64, carbs: f64) -> Result<()> {
    let title = format!("Guidelines for {}/{}/{} (protein/fat/carbs)", protein, fat, carbs);
    display_guidelines(&guidelines(protein, fat, carbs), &title);
    Ok(())
}

/// A fresh session for the one-shot supplement commands. Acknowledging
/// prints the guidelines first unless the output must stay machine-readable.
fn supplement_session(acknowledge: bool, quiet: bool) -> Session {
    let mut session = Session::default();
    if acknowledge {
        if !quiet {
            display_commandments();
        }
        session.acknowledge_guidelines();
    }
    session
}

fn cmd_catalog(
    search: &str,
    category: &str,
    show: Option<&str>,
    csv: Option<&Path>,
    acknowledge: bool,
) -> Result<()> {
    let session = supplement_session(acknowledge, csv.is_some());

    if let Some(path) = csv {
        let records = session.all_supplements()?;
        write_catalog_csv(records, path)?;
        println!("Wrote {} supplements to {}", records.len(), path.display());
        return Ok(());
    }

    if let Some(name) = show {
        display_supplement(session.lookup(name)?);
        return Ok(());
    }

    display_supplement_list(&session.browse(search, category)?, category);
    Ok(())
}

fn cmd_scenario(text: &str, json: bool, acknowledge: bool) -> Result<()> {
    let mut session = supplement_session(acknowledge, json);
    let rec = session.analyze(text)?.clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        display_recommendation(&rec, &resolve(&rec, catalog()));
    }
    Ok(())
}

fn cmd_export(body: &BodyArgs, output: Option<PathBuf>) -> Result<()> {
    let session = valid_session(resolve_input(body)?)?;
    let Some(projection) = session.projection() else {
        return Ok(());
    };

    let today = chrono::Local::now().date_naive();
    let path = output.unwrap_or_else(|| PathBuf::from(default_report_filename(today)));

    write_report(&build_report(session.input(), projection, today), &path)?;
    println!("Report written to {}", path.display());
    Ok(())
}
