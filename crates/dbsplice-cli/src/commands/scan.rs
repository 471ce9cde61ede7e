//! Implementation of the `dbsplice scan` command.

use tracing::{info, instrument};

use dbsplice_adapters::LocalFilesystem;
use dbsplice_core::application::{Outcome, SpliceService};

use crate::{
    cli::{FileArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `dbsplice scan` command.
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

    info!(root = %root.display(), "scan started");
    let service = SpliceService::new(Box::new(LocalFilesystem::new()));
    let outcome = service
        .scan(&file, &root, &separator)
        .map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({
                "operation": "scan",
                "changed": outcome.is_changed(),
                "count": outcome.count(),
            })
        );
        return Ok(());
    }

    match outcome {
        Outcome::Changed(count) => {
            output.success(&format!(
                "Appended {count} reference(s) to {}",
                file.display()
            ))?;
        }
        Outcome::Unchanged => {
            output.warning(
                "Nothing found. Referencing files must contain the table name in their path.",
            )?;
        }
    }
    Ok(())
}
