use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RecordKind;
use crate::store::LogStore;
use crate::store::audit::audit_or_warn;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - one empty log file (header only) per record kind
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("⚙️  Initializing fitlog…");

    for kind in RecordKind::ALL {
        let store = LogStore::open(cfg.log_file(kind), kind)?;
        if store.init_file()? {
            println!("📄 Created {}", store.path().display());
        } else {
            println!("📄 Found   {} ({} records)", store.path().display(), store.len());
        }
    }

    audit_or_warn(
        &cfg.audit_file(),
        "init",
        &cfg.data_dir,
        &format!("Data directory initialized at {}", cfg.data_dir),
    );

    println!("🎉 fitlog initialization completed!");
    Ok(())
}
