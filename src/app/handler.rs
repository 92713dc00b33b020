//! Lending action handlers.
//!
//! The four actions share one implementation and differ only in the
//! [`LendingAction`] they carry.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{
    error_result, ActionContext, ActionPayload, LendingAction, TokenRegistry, TransactionPayload,
};
use crate::error::Error;
use crate::port::{ActionHandler, TransactionApi};

enum Failure {
    UnsupportedToken(String),
    Delegation(Error),
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Self::Delegation(err)
    }
}

/// Resolves the token, builds the transaction payload and delegates to the
/// transaction API. Single attempt, no retries.
pub struct LendingHandler {
    action: LendingAction,
    platform: String,
    tokens: Arc<TokenRegistry>,
    api: Arc<dyn TransactionApi>,
}

impl LendingHandler {
    pub fn new(
        action: LendingAction,
        platform: impl Into<String>,
        tokens: Arc<TokenRegistry>,
        api: Arc<dyn TransactionApi>,
    ) -> Self {
        Self {
            action,
            platform: platform.into(),
            tokens,
            api,
        }
    }

    #[must_use]
    pub const fn action(&self) -> LendingAction {
        self.action
    }

    async fn execute(&self, ctx: &ActionContext, payload: Value) -> Result<Value, Failure> {
        let payload: ActionPayload = serde_json::from_value(payload).map_err(Error::from)?;

        let token_address = self
            .tokens
            .resolve(&payload.token_symbol)
            .ok_or_else(|| Failure::UnsupportedToken(payload.token_symbol.clone()))?;

        let request = TransactionPayload {
            transaction_type: self.action.name(),
            amount: payload.amount,
            token_address: token_address.to_string(),
        };
        debug!(
            action = %self.action,
            token = %payload.token_symbol,
            amount = %request.amount,
            token_address = %request.token_address,
            "Creating transaction"
        );

        let result = self
            .api
            .create_transaction(&self.platform, ctx, &request)
            .await?;
        Ok(result)
    }
}

#[async_trait]
impl ActionHandler for LendingHandler {
    async fn handle(&self, ctx: &ActionContext, payload: Value) -> Value {
        match self.execute(ctx, payload).await {
            Ok(result) => {
                info!(action = %self.action, action_id = ctx.action_id, "Transaction created");
                result
            }
            Err(Failure::UnsupportedToken(symbol)) => {
                warn!(action = %self.action, token = %symbol, "Unsupported token symbol");
                error_result(format!("Unsupported token symbol: {symbol}"))
            }
            Err(Failure::Delegation(err)) => {
                warn!(action = %self.action, error = %err, "Action failed");
                error_result(format!("Failed to {}: {err}", self.action.failure_verb()))
            }
        }
    }
}
