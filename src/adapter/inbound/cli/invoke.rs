//! Handler for the `invoke` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::InvokeArgs;
use crate::adapter::inbound::cli::output;
use crate::app::{App, Config};
use crate::error::Result;

/// Run one action locally and print the result value.
///
/// Action-level failures (unsupported token, API errors) are printed as the
/// `{"error": ...}` result, exactly as the host would receive them.
pub async fn execute(args: &InvokeArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    config.logging.init_stderr();
    let payload = json!({
        "tokenSymbol": args.token,
        "amount": args.amount,
    });

    let result = App::invoke(&config, args.action, payload).await?;

    if output::is_json() {
        output::json_output(result);
        return Ok(());
    }

    if let Some(message) = result.get("error").and_then(|e| e.as_str()) {
        output::error(message);
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
