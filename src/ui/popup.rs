/// Modal prompts drawn over the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    /// Path entry for loading the input from a file.
    LoadFile { path: String },
    /// Confirmation before the input is cleared.
    ConfirmClear,
}

impl Popup {
    pub fn title(&self) -> &'static str {
        match self {
            Popup::LoadFile { .. } => "Load Text File",
            Popup::ConfirmClear => "Clear Input",
        }
    }
}
