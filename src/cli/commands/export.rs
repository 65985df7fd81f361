use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::audit::audit_or_warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = open_store(cfg, *kind)?;
        let count = ExportLogic::export(&store, *format, file, range.as_deref(), *force)?;

        audit_or_warn(
            &cfg.audit_file(),
            "export",
            file,
            &format!(
                "{} {} record(s) exported as {}",
                count,
                kind.as_str(),
                format.as_str()
            ),
        );
    }
    Ok(())
}
