//! Base trait for component state.

/// Marker trait for UI state objects.
///
/// States hold everything needed to paint their component and are
/// replaced wholesale by their reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
