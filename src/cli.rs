use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, BodyCompositionInput, Gender};

/// RecompCalc: body composition projections, macro targets and supplement stacks.
#[derive(Parser, Debug)]
#[command(name = "recomp_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Step through stats, goals, nutrition and supplements interactively.
    Wizard {
        /// Start from a saved input snapshot (JSON).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Project body composition and macros from flags or a snapshot.
    Compose {
        #[command(flatten)]
        body: BodyArgs,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,

        /// Save the resolved input snapshot to this path.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Compute BMI, and estimate body fat when age is given.
    Bmi {
        /// Weight in pounds.
        #[arg(short, long)]
        weight: f64,

        #[arg(long)]
        feet: f64,

        #[arg(long, default_value_t = 0.0)]
        inches: f64,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long, value_enum, default_value_t = Gender::Male)]
        gender: Gender,
    },

    /// Estimate daily calorie needs.
    Calories {
        /// Weight in pounds.
        #[arg(short, long)]
        weight: f64,

        /// sedentary, lightly_active, moderately_active, very_active or extremely_active.
        #[arg(short, long, default_value = "moderately_active")]
        activity: String,

        /// Subtract a fat-loss deficit.
        #[arg(long)]
        deficit: bool,
    },

    /// Advice for a protein/fat/carb percentage split.
    Guidelines {
        #[arg(short, long)]
        protein: f64,

        #[arg(short, long)]
        fat: f64,

        #[arg(short, long)]
        carbs: f64,
    },

    /// Browse the supplement catalog.
    Catalog {
        /// Match name or description (case-insensitive).
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long, default_value = "All")]
        category: String,

        /// Show one supplement in full.
        #[arg(long)]
        show: Option<String>,

        /// Write the catalog to a CSV file instead of printing.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Accept the supplementation guidelines; the catalog stays locked without it.
        #[arg(long)]
        acknowledge: bool,
    },

    /// Recommend a supplement stack for a goal description.
    Scenario {
        text: String,

        /// Print the recommendation as JSON.
        #[arg(long)]
        json: bool,

        /// Accept the supplementation guidelines; analysis stays locked without it.
        #[arg(long)]
        acknowledge: bool,
    },

    /// Write the analysis report to a text file.
    Export {
        #[command(flatten)]
        body: BodyArgs,

        /// Output path (defaults to body-composition-analysis-YYYY-MM-DD.txt).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Wizard { input: None }
    }
}

/// Body composition inputs. Flags override the snapshot file, which
/// overrides the form defaults.
#[derive(Args, Debug, Default)]
pub struct BodyArgs {
    /// Input snapshot (JSON) to start from.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Current weight in pounds.
    #[arg(short, long)]
    pub weight: Option<f64>,

    /// Current body fat percentage.
    #[arg(short = 'b', long)]
    pub body_fat: Option<f64>,

    #[arg(long)]
    pub feet: Option<f64>,

    #[arg(long)]
    pub inches: Option<f64>,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Goal lean mass as a percentage of current lean mass.
    #[arg(long)]
    pub lean_pct: Option<f64>,

    /// Target body fat percentage.
    #[arg(short = 't', long)]
    pub target_body_fat: Option<f64>,

    /// Weekly weight loss in pounds.
    #[arg(short = 'r', long)]
    pub rate: Option<f64>,

    /// Daily calorie target; enables macros.
    #[arg(short, long)]
    pub calories: Option<f64>,

    #[arg(short, long)]
    pub activity: Option<String>,

    #[arg(long)]
    pub protein_pct: Option<f64>,

    #[arg(long)]
    pub fat_pct: Option<f64>,

    #[arg(long)]
    pub carb_pct: Option<f64>,
}

impl BodyArgs {
    /// Overwrite every field given on the command line.
    pub fn apply(&self, input: &mut BodyCompositionInput) {
        if let Some(v) = self.weight {
            input.weight = v;
        }
        if let Some(v) = self.body_fat {
            input.body_fat = v;
        }
        if let Some(v) = self.feet {
            input.height_feet = v;
        }
        if let Some(v) = self.inches {
            input.height_inches = v;
        }
        if let Some(v) = self.age {
            input.age = v;
        }
        if let Some(v) = self.gender {
            input.gender = v;
        }
        if let Some(v) = self.lean_pct {
            input.desired_lean_mass_pct = v;
        }
        if let Some(v) = self.target_body_fat {
            input.desired_body_fat = v;
        }
        if let Some(v) = self.rate {
            input.weekly_weight_loss = v;
        }
        if let Some(v) = self.calories {
            input.daily_calories = Some(v);
        }
        if let Some(v) = &self.activity {
            input.activity_level = ActivityLevel::parse(v);
        }
        if let Some(v) = self.protein_pct {
            input.split.protein = v;
        }
        if let Some(v) = self.fat_pct {
            input.split.fat = v;
        }
        if let Some(v) = self.carb_pct {
            input.split.carbs = v;
        }
    }
}
