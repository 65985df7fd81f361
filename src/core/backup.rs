use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::models::RecordKind;
use crate::store::audit::audit_or_warn;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy every data file (logs, goals, audit log) to `dest`.
    ///
    /// Without `compress`, `dest` is a directory that receives plain copies;
    /// with `compress`, a single `.zip` archive is written instead.
    /// Returns the path actually written.
    pub fn backup(cfg: &Config, dest: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        // 1️⃣ Collect the files that exist
        let sources: Vec<PathBuf> = data_files(cfg)
            .into_iter()
            .filter(|p| p.exists())
            .collect();

        if sources.is_empty() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No data files found in {}", cfg.data_path().display()),
            )));
        }

        // 2️⃣ Copy or compress
        let final_path = if compress {
            let zip_path = Path::new(dest).with_extension("zip");
            ensure_writable(&zip_path, force)?;
            compress_backup(&sources, &zip_path)?;
            println!("📦 Compressed: {}", zip_path.display());
            zip_path
        } else {
            let dir = PathBuf::from(dest);
            fs::create_dir_all(&dir)?;
            for src in &sources {
                let target = dir.join(file_name(src)?);
                ensure_writable(&target, force)?;
                fs::copy(src, &target)?;
            }
            dir
        };

        println!("✅ Backup created: {}", final_path.display());

        // 3️⃣ Audit
        audit_or_warn(
            &cfg.audit_file(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

fn data_files(cfg: &Config) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = RecordKind::ALL.iter().map(|k| cfg.log_file(*k)).collect();
    files.push(cfg.goals_file());
    files.push(cfg.audit_file());
    files
}

fn file_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Io(std::io::Error::other(format!("invalid path: {}", path.display()))))
}

/// Write all `sources` into a deflated .zip archive
fn compress_backup(sources: &[PathBuf], zip_path: &Path) -> AppResult<()> {
    if let Some(parent) = zip_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let mut f = fs::File::open(src)?;
        zip.start_file(file_name(src)?, options)
            .map_err(std::io::Error::other)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
