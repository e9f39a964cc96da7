// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::config::options::ExportOptions;
use crate::export::{self, ExportFormat};
use crate::item::Item;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("write {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `items` in `format` and write to `export.out_path(format)`.
/// Returns the final path written to.
pub fn write_export<'a, I>(export: &ExportOptions, format: ExportFormat, items: I) -> Result<PathBuf, ExportError>
where
    I: IntoIterator<Item = &'a Item>,
{
    let path = export.out_path(format);
    write_export_to(&path, format, export, items)?;
    Ok(path)
}

/// Same as `write_export` with an explicit target path.
pub fn write_export_to<'a, I>(path: &Path, format: ExportFormat, export: &ExportOptions, items: I) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a Item>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = export::render(items, format, export.list_delim)?;
    fs::write(path, contents).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    logf!("Export: wrote {} ({})", path.display(), format.mime());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
