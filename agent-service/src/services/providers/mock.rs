//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock text provider for testing.
///
/// Echoes the prompt back, or fails with a fixed message when built with
/// [`MockTextProvider::failing`]. Every prompt it receives is recorded.
pub struct MockTextProvider {
    failure: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn new() -> Self {
        Self {
            failure: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts seen so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .expect("mock prompt log poisoned")
            .clone()
    }
}

impl Default for MockTextProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .expect("mock prompt log poisoned")
            .push(prompt.to_string());

        match &self.failure {
            Some(message) => Err(ProviderError::ApiError(message.clone())),
            None => Ok(format!("Mock response for: {}", prompt)),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.failure {
            Some(message) => Err(ProviderError::NotConfigured(message.clone())),
            None => Ok(()),
        }
    }
}
