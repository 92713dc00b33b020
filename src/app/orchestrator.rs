//! App orchestration module.
//!
//! Wires configuration, the transaction client and the toolkit session
//! together.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::adapter::outbound::toolkit::{ToolkitClient, ToolkitSession};
use crate::adapter::outbound::HttpTransactionApi;
use crate::app::config::Config;
use crate::app::toolkit::Toolkit;
use crate::domain::{ActionContext, LendingAction};
use crate::error::Result;
use crate::port::TransactionApi;

/// Main application struct.
pub struct App;

impl App {
    /// Build the lending toolkit for `config` against the HTTP transaction API.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key or transaction endpoint is missing.
    pub fn build_toolkit(config: &Config) -> Result<Toolkit> {
        config.require_credentials()?;
        let api: Arc<dyn TransactionApi> = Arc::new(HttpTransactionApi::new(
            config.transaction.endpoint.clone(),
            config.api_key()?,
        ));
        Ok(Toolkit::lending(
            Arc::new(config.token_registry()),
            api,
            &config.transaction.platform,
        ))
    }

    /// Publish metadata, then serve actions until the host disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the metadata update is
    /// rejected, or the session fails.
    pub async fn run(config: Config) -> Result<()> {
        let toolkit = Arc::new(Self::build_toolkit(&config)?);
        let api_key = config.api_key()?;

        info!(
            name = %config.toolkit.name,
            actions = ?toolkit.action_names().collect::<Vec<_>>(),
            tokens = config.token_registry().len(),
            "Toolkit configured"
        );

        ToolkitClient::new(config.toolkit.api_url.clone(), api_key)
            .update_metadata(&config.toolkit.name, &config.toolkit.description)
            .await?;

        ToolkitSession::new(config.toolkit.ws_url.clone(), api_key, toolkit)
            .run()
            .await
    }

    /// Run a single action locally and return its result value.
    ///
    /// # Errors
    ///
    /// Returns an error only if the toolkit cannot be built; action failures
    /// are part of the returned value.
    pub async fn invoke(config: &Config, action: LendingAction, payload: Value) -> Result<Value> {
        let toolkit = Self::build_toolkit(config)?;
        let ctx = ActionContext::local(action.name());
        Ok(toolkit.dispatch(&ctx, payload).await)
    }
}
