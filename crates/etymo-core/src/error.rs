use crate::view;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("word not found: {0}")]
    NotFound(String),

    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

impl ProviderError {
    /// Message rendered into the error view, in the interface language.
    /// Diagnostic detail stays on the tracing channel.
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::NotFound(_) => view::MSG_NOT_FOUND.to_string(),
            ProviderError::DataUnavailable(_) | ProviderError::Transport(_) => {
                view::MSG_NETWORK.to_string()
            }
        }
    }
}
