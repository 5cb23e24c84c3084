use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum DaoLayerError {
    Db(DbErr),
    NotFound { entity: &'static str, id: String },
    Detached { entity: &'static str },
    UnknownAttribute { entity: &'static str, attribute: String },
    FilterMismatch { attributes: usize, values: usize },
    InvalidPageWindow { offset: u64, limit: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl fmt::Display for DaoLayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaoLayerError::Db(err) => write!(f, "Database error: {err}"),
            DaoLayerError::NotFound { entity, id } => {
                write!(f, "{entity} not found (id={id})")
            }
            DaoLayerError::Detached { entity } => {
                write!(f, "{entity} is not managed by the store; nothing to delete")
            }
            DaoLayerError::UnknownAttribute { entity, attribute } => {
                write!(f, "{entity} has no attribute named {attribute:?}")
            }
            DaoLayerError::FilterMismatch { attributes, values } => write!(
                f,
                "Filter mismatch: {attributes} attributes against {values} values"
            ),
            DaoLayerError::InvalidPageWindow { offset, limit } => {
                write!(f, "Invalid page window: offset={offset} limit={limit}")
            }
        }
    }
}

impl std::error::Error for DaoLayerError {}
