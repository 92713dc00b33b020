//! Lending domain: tokens, actions and payloads.
//!
//! Nothing in here performs I/O.

mod action;
mod payload;
mod token;

pub use action::{ActionSpec, FieldType, LendingAction, PayloadField};
pub use payload::{error_result, ActionContext, ActionPayload, TransactionPayload};
pub use token::{Token, TokenRegistry};
