//! Wire types for the summarization backend.

use serde::{Deserialize, Serialize};

/// Compute device the backend runs inference on.
///
/// Advisory only: anything the backend reports other than `cuda`/`gpu`,
/// including a missing or null value, reads as `Cpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Device {
    #[default]
    Cpu,
    Cuda,
}

impl From<Option<String>> for Device {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(name) if name.eq_ignore_ascii_case("cuda") || name.eq_ignore_ascii_case("gpu") => {
                Device::Cuda
            }
            _ => Device::Cpu,
        }
    }
}

impl Device {
    pub fn label(self) -> &'static str {
        match self {
            Device::Cpu => "CPU",
            Device::Cuda => "GPU (CUDA)",
        }
    }
}

/// Backend readiness as reported by `GET /api/status`.
///
/// Missing fields read as "not loaded on CPU", so a bare error body from
/// the reload endpoint still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub device: Device,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub model_dir: Option<String>,
}

/// Response of `POST /api/load-model`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadModelResponse {
    pub success: bool,
    #[serde(flatten)]
    pub status: ServiceStatus,
}

impl LoadModelResponse {
    /// Backend-supplied failure text, if any.
    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }
}

/// Body of `POST /api/summarize`. Built once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    text: String,
    max_length: u32,
    num_beams: u32,
}

impl SummaryRequest {
    /// Returns `None` when `text` is empty after trimming.
    pub fn new(text: &str, max_length: u32, num_beams: u32) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            max_length: max_length.max(1),
            num_beams: num_beams.max(1),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }

    pub fn num_beams(&self) -> u32 {
        self.num_beams
    }
}

/// Successful summarization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub summary: String,
    pub input_length: usize,
    pub output_length: usize,
}

/// Raw 2xx body of `/api/summarize`; `success: false` is still possible.
#[derive(Debug, Deserialize)]
pub(crate) struct SummarizeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub input_length: usize,
    #[serde(default)]
    pub output_length: usize,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body carried by non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_cuda_and_optional_fields() {
        let status: ServiceStatus =
            serde_json::from_str(r#"{"model_loaded": true, "device": "cuda"}"#).unwrap();
        assert!(status.model_loaded);
        assert_eq!(status.device, Device::Cuda);
        assert_eq!(status.error, None);
        assert_eq!(status.model_dir, None);
    }

    #[test]
    fn status_accepts_null_error() {
        let status: ServiceStatus = serde_json::from_str(
            r#"{"model_loaded": true, "device": "cpu", "error": null, "model_dir": "t5/"}"#,
        )
        .unwrap();
        assert_eq!(status.device, Device::Cpu);
        assert_eq!(status.error, None);
        assert_eq!(status.model_dir.as_deref(), Some("t5/"));
    }

    #[test]
    fn load_model_response_flattens_status() {
        let resp: LoadModelResponse = serde_json::from_str(
            r#"{"success": false, "model_loaded": false, "device": "cpu", "error": "OOM"}"#,
        )
        .unwrap();
        assert!(!resp.success);
        assert!(!resp.status.model_loaded);
        assert_eq!(resp.error(), Some("OOM"));
    }

    #[test]
    fn load_model_failure_without_status_fields() {
        let resp: LoadModelResponse =
            serde_json::from_str(r#"{"success": false, "error": "OOM"}"#).unwrap();
        assert!(!resp.success);
        assert!(!resp.status.model_loaded);
        assert_eq!(resp.status.device, Device::Cpu);
        assert_eq!(resp.error(), Some("OOM"));
    }

    #[test]
    fn unknown_or_missing_device_reads_as_cpu() {
        for body in [
            r#"{"model_loaded": true, "device": "mps"}"#,
            r#"{"model_loaded": true, "device": "cuda:0"}"#,
            r#"{"model_loaded": true, "device": null}"#,
            r#"{"model_loaded": true}"#,
        ] {
            let status: ServiceStatus = serde_json::from_str(body).unwrap();
            assert!(status.model_loaded, "{}", body);
            assert_eq!(status.device, Device::Cpu, "{}", body);
        }
        let status: ServiceStatus =
            serde_json::from_str(r#"{"model_loaded": true, "device": "GPU"}"#).unwrap();
        assert_eq!(status.device, Device::Cuda);
    }

    #[test]
    fn summary_request_rejects_blank_text() {
        assert!(SummaryRequest::new("   \n\t", 130, 4).is_none());
    }

    #[test]
    fn summary_request_serializes_trimmed_text() {
        let request = SummaryRequest::new("  hello  ", 50, 4).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "hello", "max_length": 50, "num_beams": 4})
        );
    }

    #[test]
    fn device_labels() {
        assert_eq!(Device::Cpu.label(), "CPU");
        assert_eq!(Device::Cuda.label(), "GPU (CUDA)");
    }
}
