use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::aggregate::day_total;
use crate::core::nutrition::NutritionProgress;
use crate::errors::AppResult;
use crate::models::RecordKind;
use crate::store::GoalsStore;
use crate::ui::messages::section;
use crate::utils::colors::{RESET, color_for_ratio};
use crate::utils::date::today;
use crate::utils::fmt_number;
use crate::utils::formatting::{bold, progress_bar};

/// Today's totals: nutrition against the goals, water, sleep, training volume.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let day = today();
    let goals = GoalsStore::new(cfg.goals_file()).load();

    let meals = open_store(cfg, RecordKind::Meal)?;
    let water = open_store(cfg, RecordKind::Water)?;
    let sleep = open_store(cfg, RecordKind::Sleep)?;
    let workouts = open_store(cfg, RecordKind::Workout)?;

    let progress = NutritionProgress::for_day(meals.records(), day, goals);

    section(format!("Today ({})", day.format("%Y-%m-%d")));

    print_progress(
        "Calories",
        &format!(
            "{} / {} kcal",
            fmt_number(progress.calories),
            fmt_number(goals.calories)
        ),
        progress.calories_ratio(),
    );
    print_progress(
        "Protein",
        &format!(
            "{} / {} g",
            fmt_number(progress.protein),
            fmt_number(goals.protein)
        ),
        progress.protein_ratio(),
    );

    println!(
        "{:<9} {} ml",
        "Water",
        fmt_number(day_total(water.records(), day, "amount_ml"))
    );
    println!(
        "{:<9} {} h",
        "Sleep",
        fmt_number(day_total(sleep.records(), day, "hours"))
    );
    println!(
        "{:<9} {} {}",
        "Volume",
        fmt_number(day_total(workouts.records(), day, "volume")),
        cfg.weight_unit
    );

    Ok(())
}

fn print_progress(label: &str, amounts: &str, ratio: f64) {
    println!(
        "{:<9} {}{}{} {}",
        label,
        color_for_ratio(ratio),
        progress_bar(ratio, 20),
        RESET,
        bold(amounts)
    );
}
