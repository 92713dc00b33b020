//! Toolkit session frames.
//!
//! Every frame is a JSON object `{"type": ..., "data": ...}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ActionContext, ActionSpec};

/// Frames sent to the toolkit host.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum OutboundFrame {
    /// Announces the available actions once per connection.
    RegisterActions {
        actions: BTreeMap<String, ActionSpec>,
    },
    /// Result of one action invocation.
    ActionResult(ActionResult),
}

impl OutboundFrame {
    pub fn register<'a>(specs: impl IntoIterator<Item = &'a ActionSpec>) -> Self {
        let actions = specs
            .into_iter()
            .map(|spec| (spec.name.clone(), spec.clone()))
            .collect();
        Self::RegisterActions { actions }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult {
    pub action: String,
    #[serde(rename = "actionID")]
    pub action_id: u64,
    #[serde(rename = "agentID")]
    pub agent_id: u64,
    pub payload: Value,
}

impl ActionResult {
    #[must_use]
    pub fn new(ctx: &ActionContext, payload: Value) -> Self {
        Self {
            action: ctx.action.clone(),
            action_id: ctx.action_id,
            agent_id: ctx.agent_id,
            payload,
        }
    }
}

/// Frames received from the toolkit host.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundFrame {
    Action(ActionInvocation),
    /// Any frame type this toolkit does not act on.
    Other(String),
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl InboundFrame {
    /// Decode a text frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a `{type, data}` object or an
    /// `action` frame is malformed.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let raw: RawFrame = serde_json::from_str(text)?;
        match raw.kind.as_str() {
            "action" => Ok(Self::Action(serde_json::from_value(raw.data)?)),
            _ => Ok(Self::Other(raw.kind)),
        }
    }
}

/// A request from the host to run one action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionInvocation {
    pub action: String,
    #[serde(rename = "actionID")]
    pub action_id: u64,
    #[serde(rename = "agentID")]
    pub agent_id: u64,
    #[serde(default)]
    pub payload: Value,
}

impl ActionInvocation {
    #[must_use]
    pub fn context(&self) -> ActionContext {
        ActionContext::new(self.action.clone(), self.action_id, self.agent_id)
    }

    /// The payload as a JSON value. Hosts may send it JSON-encoded inside a
    /// string; such strings are decoded, anything else is passed through.
    #[must_use]
    pub fn payload(&self) -> Value {
        match &self.payload {
            Value::String(encoded) => {
                serde_json::from_str(encoded).unwrap_or_else(|_| self.payload.clone())
            }
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other.clone(),
        }
    }
}
