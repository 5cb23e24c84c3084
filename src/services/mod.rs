pub mod context;
pub mod project_service;

pub use context::ServiceContext;
pub use project_service::ProjectService;
