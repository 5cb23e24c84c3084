use sea_orm::{ConnectOptions, Database, DatabaseBackend, DatabaseConnection, MockDatabase};

pub fn mock_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

// One pooled connection keeps every query on the same in-memory database.
pub async fn sqlite_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.expect("connect to sqlite");
    db.get_schema_registry("projman::db::entities::*")
        .sync(&db)
        .await
        .expect("sync schema");
    db
}
