//! Mapping from an active file path to its schema resolution root.
//!
//! Database projects lay their files out as `…/<db-folder>/<schema>/…`
//! (e.g. `db/hr/tables/orders.sql`).  Marker paths resolve against the
//! schema folder, so the CLI derives it from the file being operated on;
//! `--root` bypasses the derivation entirely.

use std::path::{Path, PathBuf};

/// The schema folder that owns `file`: the nearest ancestor whose parent
/// directory is named `db_folder`.
///
/// Returns `None` when the file does not live under such a layout — the
/// caller then asks the user for an explicit `--root`.
pub fn resolve_schema_root(file: &Path, db_folder: &str) -> Option<PathBuf> {
    file.ancestors()
        .skip(1) // the file itself cannot be the schema folder
        .find(|dir| {
            dir.parent()
                .and_then(|p| p.file_name())
                .is_some_and(|name| name == db_folder)
        })
        .map(Path::to_path_buf)
}
