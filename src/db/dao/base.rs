use std::str::FromStr;

use futures_util::future::BoxFuture;
use sea_orm::sea_query::{Alias, Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use tracing::{debug, warn};

use super::error::{DaoLayerError, DaoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

pub struct DaoSession {
    db: DatabaseConnection,
    txn: Option<DatabaseTransaction>,
}

impl DaoSession {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            db: db.clone(),
            txn: None,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn transaction(&self) -> Option<&DatabaseTransaction> {
        self.txn.as_ref()
    }

    pub fn transaction_active(&self) -> bool {
        self.txn.is_some()
    }

    pub async fn begin(&mut self) -> DaoResult<()> {
        if self.txn.is_none() {
            self.txn = Some(self.db.begin().await.map_err(DaoLayerError::Db)?);
        }
        Ok(())
    }

    pub async fn commit(&mut self) -> DaoResult<()> {
        if let Some(txn) = self.txn.take() {
            txn.commit().await.map_err(DaoLayerError::Db)?;
        }
        Ok(())
    }

    pub async fn rollback(&mut self) -> DaoResult<()> {
        if let Some(txn) = self.txn.take() {
            txn.rollback().await.map_err(DaoLayerError::Db)?;
        }
        Ok(())
    }

    // An abandoned unit of work must never become a durable write.
    pub async fn close(mut self) -> DaoResult<()> {
        self.rollback().await
    }

    pub async fn write<T, F>(&self, op: F) -> DaoResult<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<T, DbErr>> + Send,
    {
        if let Some(txn) = &self.txn {
            // Caller opened the transaction; commit/rollback stay with the caller.
            return op(txn).await.map_err(DaoLayerError::Db);
        }

        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;
        match op(&txn).await {
            Ok(value) => {
                txn.commit().await.map_err(DaoLayerError::Db)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "rollback after failed write did not complete");
                }
                Err(DaoLayerError::Db(err))
            }
        }
    }
}

#[async_trait::async_trait]
pub trait TransactionalDao: Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model: FromQueryResult
        + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel>
        + Send
        + Sync
        + 'static,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + Send + 'static,
    <Self::Entity as EntityTrait>::Column: FromStr,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        Clone + std::fmt::Debug + Send + Sync,
{
    type Entity: EntityTrait + Send + Sync;

    fn from_session(session: DaoSession) -> Self;

    fn session(&self) -> &DaoSession;

    fn session_mut(&mut self) -> &mut DaoSession;

    fn into_session(self) -> DaoSession;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_session(DaoSession::new(db))
    }

    fn column(name: &str) -> DaoResult<<Self::Entity as EntityTrait>::Column> {
        <Self::Entity as EntityTrait>::Column::from_str(name).map_err(|_| {
            DaoLayerError::UnknownAttribute {
                entity: std::any::type_name::<Self::Entity>(),
                attribute: name.to_string(),
            }
        })
    }

    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let active = data.into_active_model();
        debug!(entity = std::any::type_name::<Self::Entity>(), "create");
        self.session()
            .write(move |txn| Box::pin(async move { active.insert(txn).await }))
            .await
    }

    async fn read(
        &self,
        key: <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        let query = Self::Entity::find_by_id(key);
        let session = self.session();
        let model = match session.transaction() {
            Some(txn) => query.one(txn).await,
            None => query.one(session.db()).await,
        };
        model.map_err(DaoLayerError::Db)
    }

    async fn update(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        // Merge semantics: every field present on the input overwrites the stored
        // row; the returned model is the canonical instance afterwards.
        let active = data.into_active_model().reset_all();
        debug!(entity = std::any::type_name::<Self::Entity>(), "update");
        self.session()
            .write(move |txn| Box::pin(async move { active.update(txn).await }))
            .await
    }

    async fn delete(
        &self,
        entity: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<()> {
        let active = entity.into_active_model();
        debug!(entity = std::any::type_name::<Self::Entity>(), "delete");
        let result = self
            .session()
            .write(move |txn| Box::pin(async move { active.delete(txn).await }))
            .await?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::Detached {
                entity: std::any::type_name::<Self::Entity>(),
            });
        }
        Ok(())
    }

    async fn delete_by_id(
        &self,
        key: <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> DaoResult<()> {
        let entity = self
            .read(key.clone())
            .await?
            .ok_or_else(|| DaoLayerError::NotFound {
                entity: std::any::type_name::<Self::Entity>(),
                id: format!("{key:?}"),
            })?;
        self.delete(entity).await
    }

    async fn find(
        &self,
        attributes: &[&str],
        values: &[&str],
        order_by: Option<&str>,
        window: Option<PageWindow>,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        if attributes.len() != values.len() {
            return Err(DaoLayerError::FilterMismatch {
                attributes: attributes.len(),
                values: values.len(),
            });
        }

        let mut condition = Condition::all();
        for (attribute, value) in attributes.iter().zip(values) {
            let column = Self::column(attribute)?;
            // Columns compare as text under LIKE, whatever their store type.
            condition = condition.add(Expr::col(column).cast_as(Alias::new("text")).like(*value));
        }

        let mut query = Self::Entity::find().filter(condition);
        if let Some(field) = order_by {
            query = query.order_by_asc(Self::column(field)?);
        }
        if let Some(window) = window {
            if window.limit == 0 {
                return Err(DaoLayerError::InvalidPageWindow {
                    offset: window.offset,
                    limit: window.limit,
                });
            }
            query = query.offset(window.offset).limit(window.limit);
        }

        let session = self.session();
        let rows = match session.transaction() {
            Some(txn) => query.all(txn).await,
            None => query.all(session.db()).await,
        };
        rows.map_err(DaoLayerError::Db)
    }

    async fn find_by(
        &self,
        attributes: &[&str],
        values: &[&str],
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        self.find(attributes, values, None, None).await
    }

    async fn find_all(&self) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        let query = Self::Entity::find();
        let session = self.session();
        let rows = match session.transaction() {
            Some(txn) => query.all(txn).await,
            None => query.all(session.db()).await,
        };
        rows.map_err(DaoLayerError::Db)
    }

    fn transaction_active(&self) -> bool {
        self.session().transaction_active()
    }

    async fn begin(&mut self) -> DaoResult<()> {
        self.session_mut().begin().await
    }

    async fn commit(&mut self) -> DaoResult<()> {
        self.session_mut().commit().await
    }

    async fn rollback(&mut self) -> DaoResult<()> {
        self.session_mut().rollback().await
    }

    async fn close(self) -> DaoResult<()> {
        self.into_session().close().await
    }
}
