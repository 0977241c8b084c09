//! Request and response bodies for the agent API.

pub mod chat;
pub mod history;

pub use chat::{ChatRequest, ChatResponse};
pub use history::{HistoryResponse, SaveHistoryRequest, SaveHistoryResponse};
