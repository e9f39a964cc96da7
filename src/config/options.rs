// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::export::ExportFormat;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub export: ExportOptions,
    pub search: SearchOptions,
}

/// Where the catalog comes from. Each entry is either an
/// `http://host[:port]/path` URL or a local file path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    pub primary: String,
    pub secondary: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            primary: s!(PRIMARY_SOURCE),
            secondary: s!(SECONDARY_SOURCE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub quiet_ms: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { quiet_ms: QUIET_MS }
    }
}

impl SearchOptions {
    pub fn quiet(&self) -> Duration {
        Duration::from_millis(self.quiet_ms)
    }
}

/// Separator used when a list field is flattened into one CSV cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListDelim {
    #[default]
    Semicolon,
    Pipe,
}

impl ListDelim {
    pub fn joiner(self) -> &'static str {
        match self {
            ListDelim::Semicolon => "; ",
            ListDelim::Pipe => " | ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub stem: String, // without extension
    pub list_delim: ListDelim,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            stem: s!(DEFAULT_EXPORT_STEM),
            list_delim: ListDelim::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>` for the given format.
    pub fn out_path(&self, format: ExportFormat) -> PathBuf {
        self.dir.join(format!("{}.{}", self.stem, format.ext()))
    }

    /// Parse user text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.stem = stem.to_string_lossy().into_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_path_splits_dir_and_stem() {
        let mut export = ExportOptions::default();
        export.set_path("dumps/items.txt");
        assert_eq!(export.dir, PathBuf::from("dumps"));
        assert_eq!(export.stem, "items");
        assert_eq!(export.out_path(ExportFormat::Json), PathBuf::from("dumps/items.json"));
    }

    #[test]
    fn default_paths_use_export_stem() {
        let export = ExportOptions::default();
        let p = export.out_path(ExportFormat::Csv);
        assert!(p.to_string_lossy().ends_with("arc-raiders-items.csv"));
    }
}
