use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the summarization backend lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the backend (e.g., "http://127.0.0.1:5000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5). Calls themselves are unbounded.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Bounds and initial values of the generation controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Initial summary length in tokens (default: 130).
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_max_length_min")]
    pub max_length_min: u32,
    #[serde(default = "default_max_length_max")]
    pub max_length_max: u32,
    #[serde(default = "default_max_length_step")]
    pub max_length_step: u32,
    /// Initial beam count (default: 4).
    #[serde(default = "default_num_beams")]
    pub num_beams: u32,
    #[serde(default = "default_num_beams_max")]
    pub num_beams_max: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory saved summaries are written to. Current directory when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_length() -> u32 {
    130
}

fn default_max_length_min() -> u32 {
    20
}

fn default_max_length_max() -> u32 {
    200
}

fn default_max_length_step() -> u32 {
    10
}

fn default_num_beams() -> u32 {
    4
}

fn default_num_beams_max() -> u32 {
    6
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            max_length_min: default_max_length_min(),
            max_length_max: default_max_length_max(),
            max_length_step: default_max_length_step(),
            num_beams: default_num_beams(),
            num_beams_max: default_num_beams_max(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
