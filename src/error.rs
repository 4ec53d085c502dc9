//! Error type for controller startup and host calls.
//!
//! Rejected credentials are not an error; see
//! [`crate::controller::LoginOutcome::Rejected`].

/// Errors surfaced by binding, configuration, and host calls.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// A configured element id is absent from the host document.
    #[error("element #{id} ({role}) not found")]
    MissingElement { id: String, role: &'static str },
    /// The JSON configuration override could not be parsed.
    #[error("invalid controller config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    /// A browser API call failed.
    #[error("host call failed: {0}")]
    Host(String),
}

impl ControllerError {
    pub(crate) fn missing(id: &str, role: &'static str) -> Self {
        Self::MissingElement { id: id.to_owned(), role }
    }
}
