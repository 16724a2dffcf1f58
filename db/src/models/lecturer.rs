use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "lecturers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
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
    pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Self, DbErr> {
        ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
        }
        .insert(db)
        .await
    }

    pub async fn all_by_name(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::Name).all(db).await
    }
}
