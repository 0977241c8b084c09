pub mod history_store;
pub mod providers;

pub use history_store::{HistoryError, HistoryStore};
