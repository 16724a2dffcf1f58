pub mod models;
pub mod schema;
pub mod seed;
pub mod test_utils;

use chrono::NaiveDate;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

pub use schema::ensure_schema;
pub use seed::seed_if_empty;

/// Opens the configured database.
///
/// `DATABASE_PATH` may be a full DSN or a plain SQLite file path; in the latter case the
/// parent directory is created and the file is opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url
    } else {
        // SQLite won't create intermediate dirs
        if let Some(parent) = Path::new(&path_or_url).parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(
                    dir = %parent.display(),
                    error = %e,
                    "could not create database directory"
                );
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);
    Database::connect(opts).await
}

/// Creates missing tables and loads the demo fixture into an empty store.
pub async fn setup_database(db: &DatabaseConnection, today: NaiveDate) -> Result<bool, DbErr> {
    ensure_schema(db).await?;
    seed_if_empty(db, today).await
}
