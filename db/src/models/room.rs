use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A teaching room and the reader installed in it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    /// Identifier the reader reports with each tap. One reader per room.
    #[sea_orm(unique)]
    pub reader_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lecture::Entity")]
    Lectures,
}

impl Related<super::lecture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lectures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        reader_id: &str,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
            reader_id: Set(reader_id.to_owned()),
        }
        .insert(db)
        .await
    }
}
