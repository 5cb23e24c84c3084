use sea_orm::DatabaseConnection;

use super::{ProjectDao, TransactionalDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    // Every DAO starts with a fresh session and no transaction in flight.
    pub fn project(&self) -> ProjectDao {
        TransactionalDao::new(&self.db)
    }

    pub fn user(&self) -> UserDao {
        TransactionalDao::new(&self.db)
    }
}
