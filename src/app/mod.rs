//! Application layer - configuration, action handlers and orchestration.

pub mod config;
mod handler;
mod orchestrator;
mod toolkit;

pub use config::{Config, LoggingConfig, ToolkitConfig, TransactionConfig};
pub use handler::LendingHandler;
pub use orchestrator::App;
pub use toolkit::Toolkit;
