//! Outbound adapters: HTTP and WebSocket clients for external services.

pub mod toolkit;
pub mod transaction;

pub use transaction::HttpTransactionApi;
