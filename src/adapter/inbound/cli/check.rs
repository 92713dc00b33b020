//! Handler for `check config`.

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::app::config::{API_KEY_VAR, ENDPOINT_VAR};
use crate::app::Config;
use crate::error::Result;

/// Validate configuration and report what the toolkit would run with.
///
/// Fails when the file is invalid or a required environment variable is
/// missing.
pub fn config(args: &ConfigPathArg) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;

    output::header(env!("CARGO_PKG_VERSION"));
    match &args.config {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "defaults"),
    }
    output::field("Toolkit", &config.toolkit.name);
    output::field("Host API", &config.toolkit.api_url);
    output::field("Host WS", &config.toolkit.ws_url);
    output::field("Tokens", config.token_registry().len());

    if let Err(e) = config.require_credentials() {
        output::error(&e.to_string());
        output::hint(&format!(
            "set {} and {} in the environment or a .env file",
            output::highlight(API_KEY_VAR),
            output::highlight(ENDPOINT_VAR)
        ));
        return Err(e);
    }

    output::field("Tx API", &config.transaction.endpoint);
    output::success("Configuration is valid");
    Ok(())
}
