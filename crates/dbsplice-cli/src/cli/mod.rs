//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dbsplice",
    bin_name = "dbsplice",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f5c2} Split, join, and cross-reference SQL install files",
    long_about = "dbsplice maintains composite SQL install files that embed \
                  other files via `-- File: <path>` markers: it splits them \
                  into their parts, joins them back together, and discovers \
                  related constraint, index, and trigger files.",
    after_help = "EXAMPLES:\n\
        \x20 dbsplice split db/hr/tables/orders.sql\n\
        \x20 dbsplice join  db/hr/tables/orders.sql\n\
        \x20 dbsplice scan  db/hr/tables/orders.sql\n\
        \x20 dbsplice counterpart db/hr/packages/orders_api.pks\n\
        \x20 dbsplice completions bash > /usr/share/bash-completion/completions/dbsplice",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a composite file into its marker-referenced target files.
    #[command(
        visible_alias = "s",
        about = "Split a composite file into its referenced files",
        after_help = "EXAMPLES:\n\
            \x20 dbsplice split db/hr/tables/orders.sql\n\
            \x20 dbsplice split install.sql --root db/hr"
    )]
    Split(FileArgs),

    /// Join a composite file back together from its target files.
    #[command(
        visible_alias = "j",
        about = "Join referenced files back into a composite file",
        after_help = "EXAMPLES:\n\
            \x20 dbsplice join db/hr/tables/orders.sql\n\
            \x20 dbsplice join install.sql --root db/hr"
    )]
    Join(FileArgs),

    /// Scan the schema for files referencing this table and append them
    /// as markers.
    #[command(
        about = "Append markers for files that reference this table",
        after_help = "EXAMPLES:\n\
            \x20 dbsplice scan db/hr/tables/orders.sql"
    )]
    Scan(FileArgs),

    /// Print the logical partner of a file (spec/body, table/DDL).
    #[command(
        about = "Print the counterpart of a file",
        after_help = "EXAMPLES:\n\
            \x20 dbsplice counterpart db/hr/packages/orders_api.pks\n\
            \x20 dbsplice counterpart db/hr/tables/orders.sql"
    )]
    Counterpart(CounterpartArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dbsplice completions bash > ~/.local/share/bash-completion/completions/dbsplice\n\
            \x20 dbsplice completions zsh  > ~/.zfunc/_dbsplice\n\
            \x20 dbsplice completions fish > ~/.config/fish/completions/dbsplice.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the dbsplice configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dbsplice config get marker\n\
            \x20 dbsplice config list\n\
            \x20 dbsplice config path"
    )]
    Config(ConfigCommands),
}

// ── split / join / scan ───────────────────────────────────────────────────────

/// Arguments shared by the three composite-file operations.
#[derive(Debug, Args)]
pub struct FileArgs {
    /// The composite (or table) file to operate on.
    #[arg(value_name = "FILE", help = "File to operate on")]
    pub file: PathBuf,

    /// Resolution root for marker paths.  Defaults to the schema folder
    /// derived from FILE's path (`…/<db-folder>/<schema>`).
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Resolution root for marker paths"
    )]
    pub root: Option<PathBuf>,
}

// ── counterpart ───────────────────────────────────────────────────────────────

/// Arguments for `dbsplice counterpart`.
#[derive(Debug, Args)]
pub struct CounterpartArgs {
    /// The file whose partner should be printed.
    #[arg(value_name = "FILE", help = "File to find the counterpart of")]
    pub file: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dbsplice completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dbsplice config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `marker` or `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_split_command() {
        let cli = Cli::parse_from(["dbsplice", "split", "db/hr/tables/orders.sql"]);
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.file, PathBuf::from("db/hr/tables/orders.sql"));
                assert!(args.root.is_none());
            }
            other => panic!("expected Split, got {other:?}"),
        }
    }

    #[test]
    fn parse_join_with_explicit_root() {
        let cli = Cli::parse_from(["dbsplice", "join", "install.sql", "--root", "db/hr"]);
        match cli.command {
            Commands::Join(args) => {
                assert_eq!(args.root, Some(PathBuf::from("db/hr")));
            }
            other => panic!("expected Join, got {other:?}"),
        }
    }

    #[test]
    fn split_alias_works() {
        let cli = Cli::parse_from(["dbsplice", "s", "install.sql"]);
        assert!(matches!(cli.command, Commands::Split(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["dbsplice", "--quiet", "--verbose", "split", "x.sql"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_get_parses_key() {
        let cli = Cli::parse_from(["dbsplice", "config", "get", "marker"]);
        match cli.command {
            Commands::Config(ConfigCommands::Get { key }) => assert_eq!(key, "marker"),
            other => panic!("expected Config Get, got {other:?}"),
        }
    }
}
