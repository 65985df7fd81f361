use crate::errors::{AppError, AppResult};
use crate::models::RecordKind;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
    #[serde(default = "default_meal_categories")]
    pub meal_categories: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    Config::default_data_dir().to_string_lossy().to_string()
}
fn default_weight_unit() -> String {
    "lbs".to_string()
}
fn default_meal_categories() -> Vec<String> {
    ["Breakfast", "Lunch", "Dinner", "Snack", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            weight_unit: default_weight_unit(),
            meal_categories: default_meal_categories(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fitlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fitlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fitlog.conf")
    }

    /// Default location of the log files
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn log_file(&self, kind: RecordKind) -> PathBuf {
        self.data_path().join(kind.file_name())
    }

    pub fn goals_file(&self) -> PathBuf {
        self.data_path().join("goals.csv")
    }

    pub fn audit_file(&self) -> PathBuf {
        self.data_path().join("audit_log.csv")
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration file and data directory
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();

        // data dir: user provided or default
        let data_dir = match custom_dir {
            Some(name) => expand_tilde(&name),
            None => Self::default_data_dir(),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(config)
    }
}
