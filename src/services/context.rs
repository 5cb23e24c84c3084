use sea_orm::DatabaseConnection;

use crate::db::dao::DaoContext;
use crate::services::project_service::ProjectService;

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn project(&self) -> ProjectService {
        ProjectService::new(self.daos.project())
    }
}
