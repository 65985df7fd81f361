use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::parse_amount;
use crate::errors::AppResult;
use crate::models::Goals;
use crate::store::GoalsStore;
use crate::store::audit::audit_or_warn;
use crate::ui::messages::{info, success};
use crate::utils::fmt_number;

/// Print the goals, or update them when at least one value is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goals { calories, protein } = cmd {
        let store = GoalsStore::new(cfg.goals_file());
        let current = store.load();

        if calories.is_none() && protein.is_none() {
            info(format!(
                "Daily goals: {} kcal, {} g protein",
                fmt_number(current.calories),
                fmt_number(current.protein)
            ));
            return Ok(());
        }

        let updated = Goals {
            calories: match calories {
                Some(v) => parse_amount("calories", v)?,
                None => current.calories,
            },
            protein: match protein {
                Some(v) => parse_amount("protein", v)?,
                None => current.protein,
            },
        };

        store.save(&updated)?;

        let msg = format!(
            "{} kcal, {} g protein",
            fmt_number(updated.calories),
            fmt_number(updated.protein)
        );
        success(format!("Goals saved: {}", msg));
        audit_or_warn(&cfg.audit_file(), "goals", "", &msg);
    }
    Ok(())
}
