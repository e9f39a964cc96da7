// src/config/file.rs
//
// Optional TOML config next to the binary's working directory.
// Missing file → defaults. Broken file → logged, defaults.

use std::{fs, io, path::Path};

use thiserror::Error;

use super::options::AppOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

pub fn read(path: &Path) -> Result<AppOptions, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

pub fn write(path: &Path, options: &AppOptions) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, toml::to_string_pretty(options)?)?;
    Ok(())
}

/// Best-effort load used by both frontends.
pub fn load_or_default(path: &Path) -> AppOptions {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return AppOptions::default();
    }
    match read(path) {
        Ok(opts) => {
            logf!("Config: loaded {}", path.display());
            opts
        }
        Err(e) => {
            loge!("Config: {} unusable ({}), using defaults", path.display(), e);
            AppOptions::default()
        }
    }
}
