//! Counterpart Service - navigation between paired database files.
//!
//! Maps a file to its logical partner: a table definition to its latest
//! DDL revision file, a DDL revision back to the table, and a package or
//! type spec to its body (and vice versa). Read-only; never creates files.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, error::SpliceResult};

/// Service for counterpart lookups.
pub struct CounterpartService {
    filesystem: Box<dyn Filesystem>,
}

impl CounterpartService {
    /// Create a new counterpart service.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Find the partner file, if it exists on disk.
    ///
    /// The mapping depends on the folder the file lives in:
    /// - `tables/<name>.sql` → highest-indexed `tables_ddl/<name>.<N>.sql`
    /// - `tables_ddl/<name>.<N>.sql` → `tables/<name>.sql`
    /// - `packages/<name>.pks` ↔ `.pkb`, `.tps` ↔ `.tpb` (case preserved)
    #[instrument(skip_all, fields(file = %file.display()))]
    pub fn counterpart(&self, file: &Path) -> SpliceResult<Option<PathBuf>> {
        let Some(parent) = file.parent() else {
            return Ok(None);
        };
        let Some(folder) = parent.file_name().and_then(|n| n.to_str()) else {
            return Ok(None);
        };

        let candidate = match folder {
            "tables" => self.latest_ddl_file(file, parent)?,
            "tables_ddl" => base_table_file(file, parent),
            "packages" => paired_extension_file(file),
            _ => None,
        };

        if let Some(path) = &candidate {
            debug!(candidate = %path.display(), "counterpart candidate");
        }
        Ok(candidate.filter(|path| self.filesystem.exists(path)))
    }

    /// `tables/<name>.sql` → the `tables_ddl/<name>.<N>.sql` with the
    /// highest revision index N.
    fn latest_ddl_file(&self, file: &Path, parent: &Path) -> SpliceResult<Option<PathBuf>> {
        let Some(stem) = first_dot_stem(file) else {
            return Ok(None);
        };
        let ddl_dir = parent.join("tables_ddl");

        let mut best: Option<(u32, PathBuf)> = None;
        for candidate in self.filesystem.list_files(&ddl_dir)? {
            let Some(name) = candidate.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(index) = ddl_index(name, stem) else {
                continue;
            };
            if best.as_ref().is_none_or(|(top, _)| index > *top) {
                best = Some((index, candidate));
            }
        }
        Ok(best.map(|(_, path)| path))
    }
}

/// Base name up to the first dot (`orders.2.sql` → `orders`).
fn first_dot_stem(file: &Path) -> Option<&str> {
    let name = file.file_name()?.to_str()?;
    name.split('.').next().filter(|stem| !stem.is_empty())
}

/// Revision index of `<stem>.<N>.sql`, or None when the name has any other
/// shape.
fn ddl_index(name: &str, stem: &str) -> Option<u32> {
    let rest = name.strip_prefix(stem)?.strip_prefix('.')?;
    rest.strip_suffix(".sql")?.parse().ok()
}

/// `tables_ddl/<name>.<N>.sql` → `tables/<name>.sql` (keeps the actual
/// extension of the revision file).
fn base_table_file(file: &Path, parent: &Path) -> Option<PathBuf> {
    let stem = first_dot_stem(file)?;
    let ext = file.extension()?.to_str()?;
    Some(parent.parent()?.join(format!("{stem}.{ext}")))
}

/// Package/type spec ↔ body extension switch, case preserved.
fn paired_extension_file(file: &Path) -> Option<PathBuf> {
    let ext = file.extension()?.to_str()?;
    let paired = match ext {
        "pks" => "pkb",
        "pkb" => "pks",
        "tps" => "tpb",
        "tpb" => "tps",
        "PKS" => "PKB",
        "PKB" => "PKS",
        "TPS" => "TPB",
        "TPB" => "TPS",
        _ => return None,
    };
    Some(file.with_extension(paired))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpliceResult;
    use mockall::mock;

    mock! {
        Fs {}
        impl Filesystem for Fs {
            fn read_to_string(&self, path: &Path) -> SpliceResult<String>;
            fn write_file(&self, path: &Path, content: &str) -> SpliceResult<()>;
            fn create_dir_all(&self, path: &Path) -> SpliceResult<()>;
            fn exists(&self, path: &Path) -> bool;
            fn walk_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>>;
            fn list_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>>;
        }
    }

    #[test]
    fn table_file_maps_to_highest_ddl_revision() {
        let mut fs = MockFs::new();
        fs.expect_list_files().returning(|dir| {
            Ok(vec![
                dir.join("orders.1.sql"),
                dir.join("orders.12.sql"),
                dir.join("orders.3.sql"),
                dir.join("customers.20.sql"),
            ])
        });
        fs.expect_exists().return_const(true);

        let service = CounterpartService::new(Box::new(fs));
        let partner = service
            .counterpart(Path::new("/ws/db/hr/tables/orders.sql"))
            .unwrap();
        assert_eq!(
            partner,
            Some(PathBuf::from("/ws/db/hr/tables/tables_ddl/orders.12.sql"))
        );
    }

    #[test]
    fn ddl_revision_maps_back_to_table_file() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);

        let service = CounterpartService::new(Box::new(fs));
        let partner = service
            .counterpart(Path::new("/ws/db/hr/tables/tables_ddl/orders.3.sql"))
            .unwrap();
        assert_eq!(partner, Some(PathBuf::from("/ws/db/hr/tables/orders.sql")));
    }

    #[test]
    fn package_spec_maps_to_body_and_back() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);

        let service = CounterpartService::new(Box::new(fs));
        assert_eq!(
            service
                .counterpart(Path::new("/ws/db/hr/packages/orders_api.pks"))
                .unwrap(),
            Some(PathBuf::from("/ws/db/hr/packages/orders_api.pkb"))
        );
        assert_eq!(
            service
                .counterpart(Path::new("/ws/db/hr/packages/orders_api.pkb"))
                .unwrap(),
            Some(PathBuf::from("/ws/db/hr/packages/orders_api.pks"))
        );
    }

    #[test]
    fn uppercase_extensions_stay_uppercase() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);

        let service = CounterpartService::new(Box::new(fs));
        assert_eq!(
            service
                .counterpart(Path::new("/ws/db/hr/packages/ORDERS_API.PKS"))
                .unwrap(),
            Some(PathBuf::from("/ws/db/hr/packages/ORDERS_API.PKB"))
        );
    }

    #[test]
    fn unrelated_folder_has_no_counterpart() {
        let fs = MockFs::new();
        let service = CounterpartService::new(Box::new(fs));
        assert_eq!(
            service
                .counterpart(Path::new("/ws/db/hr/views/v_orders.sql"))
                .unwrap(),
            None
        );
    }

    #[test]
    fn missing_partner_on_disk_yields_none() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);

        let service = CounterpartService::new(Box::new(fs));
        assert_eq!(
            service
                .counterpart(Path::new("/ws/db/hr/packages/orders_api.pks"))
                .unwrap(),
            None
        );
    }

    #[test]
    fn ddl_index_requires_exact_stem_and_numeric_revision() {
        assert_eq!(ddl_index("orders.2.sql", "orders"), Some(2));
        assert_eq!(ddl_index("orders.12.sql", "orders"), Some(12));
        assert_eq!(ddl_index("orders_audit.2.sql", "orders"), None);
        assert_eq!(ddl_index("orders.sql", "orders"), None);
        assert_eq!(ddl_index("orders.two.sql", "orders"), None);
    }
}
