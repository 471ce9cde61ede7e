//! Implementation of the `dbsplice counterpart` command.

use tracing::instrument;

use dbsplice_adapters::LocalFilesystem;
use dbsplice_core::application::CounterpartService;

use crate::{
    cli::{CounterpartArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `dbsplice counterpart` command.
///
/// The partner path goes to stdout unwrapped so it can feed an editor or a
/// pipe (`$EDITOR $(dbsplice counterpart …)`).
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(
    args: CounterpartArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let file = super::active_file(&args.file)?;

    let service = CounterpartService::new(Box::new(LocalFilesystem::new()));
    let partner = service.counterpart(&file).map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        println!("{}", serde_json::json!({ "counterpart": partner }));
        return Ok(());
    }

    match partner {
        Some(path) => println!("{}", path.display()),
        None => output.warning("No counterpart found for this file")?,
    }
    Ok(())
}
