//! Inbound action payloads, outbound transaction payloads and results.

use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};

/// Identifies a single action invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionContext {
    pub action: String,
    #[serde(default)]
    pub action_id: u64,
    #[serde(default)]
    pub agent_id: u64,
}

impl ActionContext {
    pub fn new(action: impl Into<String>, action_id: u64, agent_id: u64) -> Self {
        Self {
            action: action.into(),
            action_id,
            agent_id,
        }
    }

    /// Context for an invocation that did not come from the toolkit host.
    pub fn local(action: impl Into<String>) -> Self {
        Self::new(action, 0, 0)
    }
}

/// Payload accepted by every lending action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPayload {
    pub token_symbol: String,
    /// Kept as the JSON number received so it is forwarded unchanged.
    pub amount: Number,
}

/// Payload forwarded to the transaction API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub transaction_type: &'static str,
    pub amount: Number,
    pub token_address: String,
}

/// Build an `{error: ...}` result value.
#[must_use]
pub fn error_result(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}
