//! Toolkit host adapter: metadata API and the action session.

mod client;
mod message;
mod session;

pub use client::ToolkitClient;
pub use message::{ActionInvocation, ActionResult, InboundFrame, OutboundFrame};
pub use session::ToolkitSession;
