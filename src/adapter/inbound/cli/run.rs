//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::app::{App, Config};
use crate::error::Result;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".into();
    }
    config.init_logging();

    print_startup(&config);

    tokio::select! {
        result = App::run(config) => result,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    }
}

fn print_startup(config: &Config) {
    if output::is_quiet() && !output::is_json() {
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Toolkit", &config.toolkit.name);
    output::field("Host", &config.toolkit.ws_url);
    output::field("Platform", &config.transaction.platform);
    output::field("Tokens", config.token_registry().supported_list());
    if output::verbosity() > 0 {
        output::field("Tx API", &config.transaction.endpoint);
    }
}
