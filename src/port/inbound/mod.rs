//! Inbound ports (driving side): contracts the toolkit session calls into.

pub mod action;
