//! HTTP handlers for the agent service.

pub mod chat;
pub mod health;
pub mod history;
