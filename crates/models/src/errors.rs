use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// Message without the variant prefix, as shown to API clients.
    pub fn detail(&self) -> &str {
        match self {
            ModelError::Validation(m) => m,
        }
    }
}
