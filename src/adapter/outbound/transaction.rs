//! HTTP client for the transaction-creation service.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{ActionContext, TransactionPayload};
use crate::error::{Error, Result};
use crate::port::TransactionApi;

/// Transaction API client over HTTPS.
pub struct HttpTransactionApi {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTransactionApi {
    /// Create a new client for `endpoint`, authenticating with `api_key`.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint, api_key)
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// URL of the create-transaction route.
    #[must_use]
    pub fn create_url(&self) -> String {
        format!("{}/tx/create", self.endpoint.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequest<'a> {
    #[serde(rename = "type")]
    platform: &'a str,
    agent_id: u64,
    action_id: u64,
    payload: &'a TransactionPayload,
}

#[async_trait]
impl TransactionApi for HttpTransactionApi {
    async fn create_transaction(
        &self,
        platform: &str,
        ctx: &ActionContext,
        payload: &TransactionPayload,
    ) -> Result<Value> {
        let url = self.create_url();
        let request = CreateRequest {
            platform,
            agent_id: ctx.agent_id,
            action_id: ctx.action_id,
            payload,
        };

        info!(url = %url, platform, transaction_type = payload.transaction_type, "Submitting transaction");

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TransactionApi {
                status: status.as_u16(),
                body,
            });
        }

        let result = response.json::<Value>().await?;
        debug!(result = %result, "Transaction API responded");
        Ok(result)
    }
}
