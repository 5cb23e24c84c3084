use super::base::{DaoSession, TransactionalDao};
use crate::db::entities::prelude::Project;

pub struct ProjectDao {
    session: DaoSession,
}

impl TransactionalDao for ProjectDao {
    type Entity = Project;

    fn from_session(session: DaoSession) -> Self {
        Self { session }
    }

    fn session(&self) -> &DaoSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut DaoSession {
        &mut self.session
    }

    fn into_session(self) -> DaoSession {
        self.session
    }
}
