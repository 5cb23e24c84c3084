use tracing::debug;

use crate::{
    db::dao::{ProjectDao, TransactionalDao},
    db::entities::project,
    error::AppError,
};

pub struct ProjectService {
    project_dao: ProjectDao,
}

impl ProjectService {
    pub fn new(project_dao: ProjectDao) -> Self {
        Self { project_dao }
    }

    // "All projects for user X", expressed through the generic filter contract:
    // one owner attribute matched against the textual user id.
    pub async fn list_projects(&self, user_id: i32) -> Result<Vec<project::Model>, AppError> {
        debug!(user_id, "list projects");
        let owner = user_id.to_string();
        let attributes = ["owner"];
        let values = [owner.as_str()];
        Ok(self.project_dao.find_by(&attributes, &values).await?)
    }
}
