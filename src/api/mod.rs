//! Client for the summarization backend's JSON-over-HTTP API.

mod client;
mod error;
mod types;

pub use client::{ApiClient, LOAD_MODEL_PATH, STATUS_PATH, SUMMARIZE_PATH};
pub use error::ApiError;
pub use types::{Device, LoadModelResponse, ServiceStatus, SummaryRequest, SummaryResult};
