use crate::cli::commands::open_store;
use crate::cli::parser::{AddEntry, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::input;
use crate::errors::AppResult;

/// Validate the input, then append it to the matching log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { entry } = cmd {
        //
        // 1. Validate (nothing is written on error)
        //
        let entry = match entry {
            AddEntry::Workout {
                exercise,
                sets,
                reps,
                weight,
            } => input::workout(exercise, sets, reps, weight)?,
            AddEntry::Meal {
                description,
                category,
                calories,
                protein,
                carbs,
                fat,
            } => input::meal(
                description,
                category,
                calories,
                protein,
                carbs.as_deref(),
                fat.as_deref(),
                &cfg.meal_categories,
            )?,
            AddEntry::Water { amount_ml } => input::water(amount_ml)?,
            AddEntry::Sleep { hours, note } => input::sleep(hours, note.as_deref())?,
        };

        //
        // 2. Open the log and append
        //
        let mut store = open_store(cfg, entry.kind())?;
        AddLogic::apply(&mut store, entry, &cfg.audit_file())?;
    }

    Ok(())
}
