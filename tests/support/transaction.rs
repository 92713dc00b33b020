use std::sync::{Arc, Mutex};

use aave_toolkit::domain::{ActionContext, TransactionPayload};
use aave_toolkit::error::{Error, Result};
use aave_toolkit::port::TransactionApi;
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

/// One recorded `create_transaction` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub platform: String,
    pub ctx: ActionContext,
    pub payload: Value,
}

/// Transaction API double that records calls and replies with a fixed
/// response or failure.
#[derive(Clone)]
pub struct RecordingTransactionApi {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    failure: Option<String>,
    response: Value,
}

impl RecordingTransactionApi {
    pub fn new() -> Self {
        Self::responding(json!({"txHash": "0xfeed", "status": "pending"}))
    }

    pub fn responding(response: Value) -> Self {
        Self {
            calls: Arc::default(),
            failure: None,
            response,
        }
    }

    /// Every call fails with a connection error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("lock recorded calls").clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().expect("lock recorded calls").len()
    }
}

#[async_trait]
impl TransactionApi for RecordingTransactionApi {
    async fn create_transaction(
        &self,
        platform: &str,
        ctx: &ActionContext,
        payload: &TransactionPayload,
    ) -> Result<Value> {
        self.calls
            .lock()
            .expect("lock recorded calls")
            .push(RecordedCall {
                platform: platform.to_string(),
                ctx: ctx.clone(),
                payload: serde_json::to_value(payload)?,
            });

        match &self.failure {
            Some(message) => Err(Error::Connection(message.clone())),
            None => Ok(self.response.clone()),
        }
    }
}

/// Transaction API double whose calls never complete.
#[derive(Clone, Default)]
pub struct StalledTransactionApi {
    started: Arc<Notify>,
}

impl StalledTransactionApi {
    /// Resolves once a call has reached the API.
    pub async fn call_started(&self) {
        self.started.notified().await;
    }
}

#[async_trait]
impl TransactionApi for StalledTransactionApi {
    async fn create_transaction(
        &self,
        _platform: &str,
        _ctx: &ActionContext,
        _payload: &TransactionPayload,
    ) -> Result<Value> {
        self.started.notify_one();
        std::future::pending().await
    }
}
