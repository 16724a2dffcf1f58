//! Schema bootstrap.
//!
//! Tables are derived from the entity definitions and created with `IF NOT EXISTS`, so the
//! call is safe on every start. There is no versioning; changes are additive only.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::models::{attendance, enrollment, lecture, lecturer, room, student};

/// Creates every table that does not exist yet.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    // referenced tables first
    create_table(db, &schema, student::Entity).await?;
    create_table(db, &schema, lecturer::Entity).await?;
    create_table(db, &schema, room::Entity).await?;
    create_table(db, &schema, lecture::Entity).await?;
    create_table(db, &schema, enrollment::Entity).await?;
    create_table(db, &schema, attendance::Entity).await?;

    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(db.get_database_backend().build(&stmt)).await?;
    tracing::debug!(table = entity.table_name(), "ensured table");
    Ok(())
}
