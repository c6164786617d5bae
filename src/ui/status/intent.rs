use crate::api::ServiceStatus;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StatusIntent {
    /// A status (or reload) response arrived.
    Apply(ServiceStatus),
    /// A reload was issued.
    Loading,
    /// Fetching or decoding the status failed.
    Failed,
}

impl Intent for StatusIntent {}
