//! Action handler port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ActionContext;

/// Handles invocations of a registered toolkit action.
///
/// Handlers never fail: every error is folded into the returned value as
/// `{"error": "..."}` so the host always receives a result.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Handle one invocation and produce the result sent back to the caller.
    async fn handle(&self, ctx: &ActionContext, payload: Value) -> Value;
}
