//! Aave v3 lending actions for a toolkit host.
//!
//! The crate exposes four actions (`supply`, `borrow`, `repay`, `withdraw`)
//! that turn a token symbol and amount into a transaction request for an
//! external transaction-creation service.
//!
//! # Modules
//!
//! - [`domain`] - Token table, actions, payloads (no I/O)
//! - [`port`] - `ActionHandler` and `TransactionApi` traits
//! - [`app`] - Configuration, handlers, action registry and orchestration
//! - [`adapter`] - HTTP transaction client, toolkit session, CLI
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use aave_toolkit::adapter::outbound::HttpTransactionApi;
//! use aave_toolkit::app::Toolkit;
//! use aave_toolkit::domain::{ActionContext, TokenRegistry};
//! use serde_json::json;
//!
//! # async fn demo() {
//! let api = Arc::new(HttpTransactionApi::new("https://tx.example/api", "key"));
//! let toolkit = Toolkit::lending(Arc::new(TokenRegistry::sepolia()), api, "Aave");
//! let _result = toolkit
//!     .dispatch(&ActionContext::local("supply"), json!({"tokenSymbol": "usdc", "amount": 100}))
//!     .await;
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod port;
