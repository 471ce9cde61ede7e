//! Reverse-reference scanning rules.
//!
//! Fixed knowledge about where table-owned objects live and how their files
//! mention the owning table. Matching is plain substring containment on
//! normalized text — a discovery aid, not a SQL parser; false positives and
//! negatives are expected and acceptable.

use std::path::Path;

/// Category directories searched for table references, relative to the
/// resolution root.
pub const SCAN_DIRS: [&str; 8] = [
    "indexes/primaries",
    "indexes/uniques",
    "indexes/defaults",
    "constraints/primaries",
    "constraints/uniques",
    "constraints/foreigns",
    "constraints/checks",
    "sources/triggers",
];

/// Table name a file maintains: its base name, lower-cased and truncated at
/// the first dot (`Orders.2.sql` → `orders`).
pub fn table_name(file: &Path) -> Option<String> {
    let base = file.file_name()?.to_str()?;
    let name = base.split('.').next().unwrap_or(base);
    if name.is_empty() {
        None
    } else {
        Some(name.to_ascii_lowercase())
    }
}

/// Normalize SQL text for phrase matching.
///
/// Whitespace runs (newlines included) collapse to single spaces, a space is
/// inserted before every opening parenthesis, and everything is lower-cased.
pub fn normalize_sql(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 16);
    let mut pending_space = false;
    for ch in content.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if (pending_space || ch == '(') && !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        pending_space = false;
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

/// True when normalized content references `table` as its owning object:
/// an `alter table <name> add` clause, or an index/trigger declared
/// `on <name> (` / `on <name> for`.
pub fn references_table(normalized: &str, table: &str) -> bool {
    normalized.contains(&format!("alter table {table} add"))
        || normalized.contains(&format!(" on {table} ("))
        || normalized.contains(&format!(" on {table} for"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_strips_extension_and_lowercases() {
        assert_eq!(
            table_name(Path::new("db/hr/tables/Orders.sql")),
            Some("orders".into())
        );
        assert_eq!(
            table_name(Path::new("orders.2.sql")),
            Some("orders".into())
        );
    }

    #[test]
    fn normalize_collapses_whitespace_runs() {
        assert_eq!(
            normalize_sql("ALTER   TABLE\r\n  orders\nADD"),
            "alter table orders add"
        );
    }

    #[test]
    fn normalize_inserts_space_before_parenthesis() {
        assert_eq!(
            normalize_sql("create index ix on orders(col)"),
            "create index ix on orders (col)"
        );
    }

    #[test]
    fn alter_table_clause_matches() {
        let normalized =
            normalize_sql("alter table orders\n  add constraint fk_orders_customer foreign key");
        assert!(references_table(&normalized, "orders"));
    }

    #[test]
    fn index_declaration_matches() {
        let normalized = normalize_sql("create unique index orders_uk on ORDERS (ref_id)");
        assert!(references_table(&normalized, "orders"));
    }

    #[test]
    fn trigger_declaration_matches() {
        let normalized =
            normalize_sql("create or replace trigger orders_biu\nbefore insert on orders for each row");
        assert!(references_table(&normalized, "orders"));
    }

    #[test]
    fn unrelated_table_does_not_match() {
        let normalized = normalize_sql("alter table customers add constraint x check (1=1)");
        assert!(!references_table(&normalized, "orders"));
    }
}
