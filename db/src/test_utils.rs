use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::schema::ensure_schema;

/// Fresh in-memory database with every table created.
///
/// The pool is capped at one connection so all statements see the same in-memory store.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory db");

    ensure_schema(&db).await.expect("Failed to create schema");

    db
}
