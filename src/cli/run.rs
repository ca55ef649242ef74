//! Handler for the `run` command.

use tracing::info;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::runtime;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the runtime
/// fails to start.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    config
        .logging
        .apply_overrides(args.log_level.as_deref(), args.json_logs);
    config.init_logging();

    info!(config = %args.config.display(), "solwatch starting");
    runtime::run(config).await
}
