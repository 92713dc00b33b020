//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!   toolkit host ──► ActionHandler ──► TransactionApi ──► transaction service
//!    (inbound)          (app)            (outbound)
//! ```
//!
//! # Available Ports
//!
//! - [`ActionHandler`] - Handles one invocation of a registered action
//! - [`TransactionApi`] - Turns a transaction payload into a submitted transaction

pub mod inbound;
pub mod outbound;

pub use inbound::action::ActionHandler;
pub use outbound::transaction::TransactionApi;
