use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use super::base::{DaoSession, TransactionalDao};
use super::error::{DaoLayerError, DaoResult};
use crate::db::entities::prelude::User;
use crate::db::entities::user;

pub struct UserDao {
    session: DaoSession,
}

impl TransactionalDao for UserDao {
    type Entity = User;

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

impl UserDao {
    pub async fn create_user(&self, email: &str, display_name: &str) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            display_name: Set(display_name.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let query = User::find().filter(user::Column::Email.eq(email));
        let session = self.session();
        let model = match session.transaction() {
            Some(txn) => query.one(txn).await,
            None => query.one(session.db()).await,
        };
        model.map_err(DaoLayerError::Db)
    }
}
