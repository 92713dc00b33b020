//! Token listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::app::Config;
use crate::error::Result;

#[derive(Tabled)]
struct TokenRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Address")]
    address: String,
}

/// List the active token table.
pub fn list(args: &ConfigPathArg) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let tokens = config.token_registry();

    if output::is_json() {
        output::json_output(json!({
            "command": "tokens.list",
            "tokens": tokens.iter().collect::<Vec<_>>(),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Supported tokens");

    let rows = tokens.iter().map(|token| TokenRow {
        symbol: token.symbol.clone(),
        address: token.address.clone(),
    });
    output::lines(&Table::new(rows).to_string());

    if config.tokens.is_none() {
        output::hint(&format!(
            "built-in Sepolia table; add {} entries to config.toml to replace it",
            output::highlight("[[tokens]]")
        ));
    }
    Ok(())
}
