//! Implementation of the `dbsplice split` command.

use tracing::{info, instrument};

use dbsplice_adapters::LocalFilesystem;
use dbsplice_core::application::{Outcome, SpliceService};

use crate::{
    cli::{FileArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `dbsplice split` command.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(
    args: FileArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let file = super::active_file(&args.file)?;
    let root = super::resolution_root(&file, &args, &config)?;
    let separator = super::separator(&config)?;

    info!(root = %root.display(), "split started");
    let service = SpliceService::new(Box::new(LocalFilesystem::new()));
    let outcome = service
        .split(&file, &root, &separator)
        .map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        // JSON goes straight to stdout so it stays parseable in pipes.
        println!(
            "{}",
            serde_json::json!({
                "operation": "split",
                "changed": outcome.is_changed(),
                "count": outcome.count(),
            })
        );
        return Ok(());
    }

    match outcome {
        Outcome::Changed(count) => {
            output.success(&format!("Split {count} file(s) out of {}", file.display()))?;
        }
        Outcome::Unchanged => {
            output.warning(&format!(
                "Nothing found to split. Put `{}relative/path.sql` above content to be split out.",
                config.marker
            ))?;
        }
    }
    Ok(())
}
