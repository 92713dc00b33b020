//! Transaction creation port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ActionContext, TransactionPayload};
use crate::error::Result;

/// Client for the external transaction-creation service.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one client is shared by all
/// action handlers and invoked concurrently.
///
/// # Errors
///
/// [`create_transaction`](Self::create_transaction) returns an error for
/// transport failures and non-success responses.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Submit a payload for the named platform and return the service's
    /// response unchanged.
    async fn create_transaction(
        &self,
        platform: &str,
        ctx: &ActionContext,
        payload: &TransactionPayload,
    ) -> Result<Value>;
}
