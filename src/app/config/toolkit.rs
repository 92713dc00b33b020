//! Toolkit host and transaction service settings.

use serde::Deserialize;

const DEFAULT_TOOLKIT_API_URL: &str = "https://backend.unifai.network/api/v1";
const DEFAULT_TOOLKIT_WS_URL: &str = "wss://backend.unifai.network/ws";

/// How the toolkit presents itself to the host and where to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Display name published on startup.
    pub name: String,
    /// Description published on startup.
    pub description: String,
    /// Base URL of the host's HTTP API (metadata updates).
    pub api_url: String,
    /// WebSocket endpoint the action session connects to.
    pub ws_url: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            name: "Aave".into(),
            description:
                "Interact with the Aave lending platform (v3) on Ethereum Sepolia Testnet.".into(),
            api_url: DEFAULT_TOOLKIT_API_URL.into(),
            ws_url: DEFAULT_TOOLKIT_WS_URL.into(),
        }
    }
}

/// Transaction-creation service settings.
///
/// `endpoint` is normally supplied through `TRANSACTION_API_ENDPOINT`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    pub endpoint: String,
    /// Platform identifier sent with every transaction request.
    pub platform: String,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            platform: "Aave".into(),
        }
    }
}
