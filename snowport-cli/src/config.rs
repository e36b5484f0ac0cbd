use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_TEMPLATE: &str = "Scalable_capital_transactions_{date}.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file name; `{date}` becomes the run date as YYYYMMDD
    pub output_file: String,
    /// Default tracing filter when neither --debug nor RUST_LOG is given
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

pub fn snowport_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".snowport"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(snowport_home()?.join("config.toml"))
}

/// Load `path`, or the default location when `None`. A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) => p,
            Err(_) => return Ok(Config::default()),
        },
    };
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}
