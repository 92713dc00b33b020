//! Registered actions and dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::handler::LendingHandler;
use crate::domain::{error_result, ActionContext, ActionSpec, LendingAction, TokenRegistry};
use crate::port::{ActionHandler, TransactionApi};

struct Registered {
    spec: ActionSpec,
    handler: Arc<dyn ActionHandler>,
}

/// The set of actions this toolkit exposes to the host.
#[derive(Default)]
pub struct Toolkit {
    actions: BTreeMap<String, Registered>,
}

impl Toolkit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the four lending actions against one transaction client.
    #[must_use]
    pub fn lending(
        tokens: Arc<TokenRegistry>,
        api: Arc<dyn TransactionApi>,
        platform: &str,
    ) -> Self {
        let mut toolkit = Self::new();
        for action in LendingAction::ALL {
            let handler = LendingHandler::new(action, platform, Arc::clone(&tokens), Arc::clone(&api));
            toolkit.register(action.spec(&tokens), Arc::new(handler));
        }
        toolkit
    }

    /// Register an action, replacing any earlier one with the same name.
    pub fn register(&mut self, spec: ActionSpec, handler: Arc<dyn ActionHandler>) {
        self.actions
            .insert(spec.name.clone(), Registered { spec, handler });
    }

    /// Route an invocation to the handler named by `ctx.action`.
    pub async fn dispatch(&self, ctx: &ActionContext, payload: Value) -> Value {
        match self.actions.get(&ctx.action) {
            Some(registered) => registered.handler.handle(ctx, payload).await,
            None => {
                warn!(action = %ctx.action, "Invocation of unknown action");
                error_result(format!("Unknown action: {}", ctx.action))
            }
        }
    }

    pub fn specs(&self) -> impl Iterator<Item = &ActionSpec> {
        self.actions.values().map(|registered| &registered.spec)
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
