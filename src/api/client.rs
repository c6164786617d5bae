use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ServerConfig;

use super::error::ApiError;
use super::types::{
    ErrorBody, LoadModelResponse, ServiceStatus, SummarizeResponse, SummaryRequest, SummaryResult,
};

pub const STATUS_PATH: &str = "/api/status";
pub const LOAD_MODEL_PATH: &str = "/api/load-model";
pub const SUMMARIZE_PATH: &str = "/api/summarize";

const REQUEST_ID_HEADER: &str = "X-Request-Id";
const SUMMARIZE_FALLBACK_ERROR: &str = "Summarization failed";

/// HTTP client for the summarization backend.
///
/// No request timeout is applied: a call may stay pending for as long as
/// the backend takes to answer. Only connection establishment is bounded.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/status`.
    pub async fn check_status(&self) -> Result<ServiceStatus, ApiError> {
        let response = self.send(Method::GET, STATUS_PATH, None).await?;
        decode_success(response).await
    }

    /// `POST /api/load-model`.
    ///
    /// The backend answers 200 even when loading fails; the outcome is in
    /// `success`.
    pub async fn load_model(&self) -> Result<LoadModelResponse, ApiError> {
        let response = self.send(Method::POST, LOAD_MODEL_PATH, None).await?;
        decode_success(response).await
    }

    /// `POST /api/summarize`.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResult, ApiError> {
        let response = self
            .send(Method::POST, SUMMARIZE_PATH, Some(request))
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| SUMMARIZE_FALLBACK_ERROR.to_string());
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let payload: SummarizeResponse = serde_json::from_slice(&body)?;
        match (payload.success, payload.summary) {
            (true, Some(summary)) => Ok(SummaryResult {
                summary,
                input_length: payload.input_length,
                output_length: payload.output_length,
            }),
            _ => Err(ApiError::Backend {
                status: status.as_u16(),
                message: payload
                    .error
                    .unwrap_or_else(|| SUMMARIZE_FALLBACK_ERROR.to_string()),
            }),
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&SummaryRequest>,
    ) -> Result<Response, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "backend_call",
            method = %method,
            path,
            request_id = %request_id
        );

        async {
            let url = format!("{}{}", self.base_url, path);
            let mut builder = self
                .client
                .request(method, url)
                .header(REQUEST_ID_HEADER, &request_id);
            if let Some(body) = body {
                builder = builder.json(body);
            }

            match builder.send().await {
                Ok(response) => {
                    tracing::debug!(status = response.status().as_u16(), "backend responded");
                    Ok(response)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "backend request failed");
                    Err(ApiError::Transport(err))
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Decode a JSON body regardless of status code.
///
/// Status and reload answers carry their outcome in the body, so a non-2xx
/// with a decodable body is still a readable status. A non-2xx without one
/// is reported with the body's `error` field when present.
async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    match serde_json::from_slice::<T>(&body) {
        Ok(value) => Ok(value),
        Err(err) if status.is_success() => Err(ApiError::Decode(err)),
        Err(err) => match serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.error)
        {
            Some(message) => Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            }),
            None => Err(ApiError::Decode(err)),
        },
    }
}
