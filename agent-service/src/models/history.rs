use serde::{Deserialize, Serialize};
use serde_json::Value;

/// History entries are caller-defined JSON and are stored as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Value,
}

#[derive(Debug, Deserialize)]
pub struct SaveHistoryRequest {
    #[serde(default)]
    pub history: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveHistoryResponse {
    pub success: bool,
}
