use crate::api::Device;
use crate::ui::mvi::UiState;

/// Model readiness badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelBadge {
    #[default]
    Unknown,
    Loading,
    Ready,
    NotLoaded,
    /// The status could not be fetched or decoded.
    Error,
}

impl ModelBadge {
    pub fn label(self) -> &'static str {
        match self {
            ModelBadge::Unknown => "Checking...",
            ModelBadge::Loading => "Loading...",
            ModelBadge::Ready => "✓ Ready",
            ModelBadge::NotLoaded => "✗ Not Loaded",
            ModelBadge::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMonitorState {
    pub badge: ModelBadge,
    pub device: Option<Device>,
    pub model_dir: Option<String>,
    /// Last `model_loaded` reported by the backend. Survives `Loading` and
    /// `Error`, which carry no readiness information.
    pub model_loaded: bool,
}

impl UiState for StatusMonitorState {}
