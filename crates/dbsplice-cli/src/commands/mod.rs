//! Command handlers and the context helpers they share.
//!
//! Each handler translates CLI arguments into core service calls and
//! displays the result. No engine logic lives here.

pub mod completions;
pub mod config;
pub mod counterpart;
pub mod join;
pub mod scan;
pub mod split;

use std::path::{Path, PathBuf};

use dbsplice_core::domain::Separator;

use crate::{
    cli::FileArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Absolute path of the file argument; errors when it does not exist.
pub(crate) fn active_file(path: &Path) -> CliResult<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| CliError::IoError {
        message: format!("cannot resolve '{}'", path.display()),
        source: e,
    })?;
    if !absolute.is_file() {
        return Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(absolute)
}

/// Resolution root for marker paths: the explicit `--root`, or the schema
/// folder derived from the file's own path.
pub(crate) fn resolution_root(
    file: &Path,
    args: &FileArgs,
    config: &AppConfig,
) -> CliResult<PathBuf> {
    if let Some(root) = &args.root {
        return std::path::absolute(root).map_err(|e| CliError::IoError {
            message: format!("cannot resolve '{}'", root.display()),
            source: e,
        });
    }

    crate::workspace::resolve_schema_root(file, &config.db_folder).ok_or_else(|| {
        CliError::SchemaNotResolved {
            path: file.to_path_buf(),
            db_folder: config.db_folder.clone(),
        }
    })
}

/// The configured marker token as a validated separator.
pub(crate) fn separator(config: &AppConfig) -> CliResult<Separator> {
    Separator::new(config.marker.clone()).map_err(|e| CliError::Core(e.into()))
}
