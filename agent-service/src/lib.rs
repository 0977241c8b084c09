//! agent-service: prompt proxy to Gemini plus a file-backed interaction
//! history, served over HTTP.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
