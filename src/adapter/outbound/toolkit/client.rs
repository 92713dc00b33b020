//! Toolkit host HTTP API.

use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};

/// Client for the host's metadata API.
pub struct ToolkitClient {
    client: Client,
    api_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct Fields<'a> {
    name: &'a str,
    description: &'a str,
}

impl ToolkitClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    #[must_use]
    pub fn fields_url(&self) -> String {
        format!("{}/toolkits/fields/", self.api_url.trim_end_matches('/'))
    }

    /// Publish the toolkit's display name and description.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the host rejects it.
    pub async fn update_metadata(&self, name: &str, description: &str) -> Result<()> {
        let url = self.fields_url();
        info!(url = %url, name, "Updating toolkit metadata");

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&Fields { name, description })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ToolkitApi {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
