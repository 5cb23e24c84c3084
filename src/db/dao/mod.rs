pub mod base;
mod context;
pub mod error;
pub mod project_dao;
pub mod user_dao;

pub use base::{DaoSession, PageWindow, TransactionalDao};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use project_dao::ProjectDao;
pub use user_dao::UserDao;
