use crate::core::aggregate::Period;
use crate::export::ExportFormat;
use crate::models::RecordKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fitlog
/// CLI application to log workouts, meals, water and sleep in CSV files
#[derive(Parser)]
#[command(
    name = "fitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple fitness log: record workouts, meals, water and sleep, and see daily and weekly totals",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a custom location)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log a new record (timestamped now)
    Add {
        #[command(subcommand)]
        entry: AddEntry,
    },

    /// List the records of a log
    List {
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long, help = "Only this exercise (case-insensitive, workouts)")]
        exercise: Option<String>,

        #[arg(long, help = "Only this meal category (meals)")]
        category: Option<String>,
    },

    /// Sum a numeric field per day, week or month
    Stats {
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long, help = "Numeric field to sum (e.g. calories, protein, volume)")]
        field: String,

        #[arg(long, value_enum, default_value = "day")]
        by: Period,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long, help = "Only this exercise (case-insensitive, workouts)")]
        exercise: Option<String>,

        #[arg(long, help = "Only this meal category (meals)")]
        category: Option<String>,

        #[arg(long = "per-exercise", help = "One bucket per period and exercise")]
        per_exercise: bool,
    },

    /// Show today's nutrition against the goals, water and training volume
    Today,

    /// Show or update the daily nutrition goals
    Goals {
        #[arg(long, help = "Daily calorie goal")]
        calories: Option<String>,

        #[arg(long, help = "Daily protein goal (g)")]
        protein: Option<String>,
    },

    /// Show the weight progression of an exercise (all exercises when omitted)
    Progress {
        exercise: Option<String>,
    },

    /// Export the records of a log
    Export {
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data files
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal audit log")]
        print: bool,
    },
}

/// Numbers are taken as text and validated before anything is written.
#[derive(Subcommand)]
pub enum AddEntry {
    /// A workout set
    Workout {
        exercise: String,

        #[arg(long)]
        sets: String,

        #[arg(long)]
        reps: String,

        #[arg(long, allow_hyphen_values = true)]
        weight: String,
    },

    /// A meal
    Meal {
        description: String,

        #[arg(long, default_value = "Other")]
        category: String,

        #[arg(long, allow_hyphen_values = true)]
        calories: String,

        #[arg(long, allow_hyphen_values = true)]
        protein: String,

        #[arg(long, allow_hyphen_values = true)]
        carbs: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        fat: Option<String>,
    },

    /// Water intake in millilitres
    Water {
        #[arg(allow_hyphen_values = true)]
        amount_ml: String,
    },

    /// Hours slept
    Sleep {
        #[arg(allow_hyphen_values = true)]
        hours: String,

        #[arg(long)]
        note: Option<String>,
    },
}
