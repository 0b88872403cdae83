use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Whether the caller sent something the store refuses to write.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_))
        )
    }

    /// Message without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            ServiceError::Validation(m) | ServiceError::NotFound(m) | ServiceError::Db(m) => m,
            ServiceError::Model(e) => e.detail(),
        }
    }
}
