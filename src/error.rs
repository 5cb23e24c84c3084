use thiserror::Error;

use crate::db::dao::DaoLayerError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) | Self::Internal(message) => {
                message.as_str()
            }
        }
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::Detached { .. }
            | DaoLayerError::UnknownAttribute { .. }
            | DaoLayerError::FilterMismatch { .. }
            | DaoLayerError::InvalidPageWindow { .. } => AppError::bad_request(err.to_string()),
            DaoLayerError::Db(_) => AppError::internal(err.to_string()),
        }
    }
}
