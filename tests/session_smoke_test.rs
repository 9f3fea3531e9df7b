use chrono::NaiveDate;
use tempfile::tempdir;

use recomp_calc_rs::catalog::catalog;
use recomp_calc_rs::error::RecompError;
use recomp_calc_rs::export::{build_report, write_report, PAGE_BREAK, PAGE_LINES};
use recomp_calc_rs::models::{BodyCompositionInput, MacroSplit, TimeSlot};
use recomp_calc_rs::recommend::{match_scenario, resolve};
use recomp_calc_rs::state::{load_input, save_input, Session};

fn sample_input() -> BodyCompositionInput {
    BodyCompositionInput {
        weight: 200.0,
        body_fat: 25.0,
        height_feet: 6.0,
        height_inches: 0.0,
        age: 35,
        daily_calories: Some(2000.0),
        ..Default::default()
    }
}

#[test]
fn test_full_session_flow() {
    let mut session = Session::new(sample_input());
    let projection = *session.projection().expect("valid input");

    let macros = projection.macros.expect("calories set");
    assert_eq!(macros.protein, 176);
    assert!(projection.bmi.is_some());

    // Supplements stay locked until acknowledged
    assert!(matches!(session.analyze("focus"), Err(RecompError::Locked)));
    session.acknowledge_guidelines();

    let rec = session.analyze("I want better focus at work").unwrap().clone();
    assert_eq!(rec.title, "Cognitive Enhancement Stack");
    assert_eq!(session.add_recommendation_to_stack().unwrap(), 4);

    assert!(matches!(
        session.add_to_stack("Creatine", TimeSlot::PreWorkout),
        Err(RecompError::SupplementNotFound(_))
    ));
    session.add_to_stack("l-citrulline", TimeSlot::PreWorkout).unwrap();
    assert_eq!(session.stack().slot(TimeSlot::PreWorkout).len(), 1);

    let removed = session.remove_from_stack("CAFFEINE", TimeSlot::Morning).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(session.stack().total_items(), 4);
}

#[test]
fn test_every_scenario_resolves_against_catalog() {
    for text in ["memory", "endurance", "libido", "anxiety", "circulation", "burn fat", "hello"] {
        let rec = match_scenario(text);
        assert_eq!(resolve(&rec, catalog()).len(), rec.supplements.len(), "{}", text);
    }
}

#[test]
fn test_snapshot_to_report() {
    let dir = tempdir().unwrap();
    let snapshot = dir.path().join("input.json");
    let report_path = dir.path().join("report.txt");

    let input = BodyCompositionInput {
        split: MacroSplit {
            protein: 40.0,
            fat: 40.0,
            carbs: 20.0,
        },
        ..sample_input()
    };
    save_input(&snapshot, &input).unwrap();

    let session = Session::new(load_input(&snapshot).unwrap());
    let projection = session.projection().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let report = build_report(session.input(), projection, date);
    write_report(&report, &report_path).unwrap();

    let text = std::fs::read_to_string(&report_path).unwrap();
    assert!(text.contains("Generated on January 15, 2025"));
    assert!(text.contains("Custom Macro Split: 40% Protein / 40% Fat / 20% Carbs"));
    assert!(text.contains("Cutting Protocol:"));

    for page in text.split(PAGE_BREAK) {
        assert!(page.trim_matches('\n').lines().count() <= PAGE_LINES);
    }

    // Sections appear in order
    let order = [
        "Current Body Composition",
        "Target Goals",
        "Timeline & Progress",
        "Custom Nutrition Plan",
        "Protein Source Guide (2-6-8-10 Hack)",
        "Intelligent Guidelines for Your Macro Split",
        "Key Insights & Recommendations",
    ];
    let positions: Vec<usize> = order.iter().map(|t| text.find(t).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_invalid_snapshot_has_no_report_inputs() {
    let session = Session::new(BodyCompositionInput {
        desired_body_fat: 0.0,
        ..sample_input()
    });
    assert!(session.projection().is_none());
    assert!(session.invalid_reason().unwrap().contains("Target body fat"));
}
