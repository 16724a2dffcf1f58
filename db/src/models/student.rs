use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder};
use serde::Serialize;

/// Represents a student in the `students` table.
///
/// A student is identified at a reader by either credential; both are unique when present.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// UID of the physical NFC card.
    #[sea_orm(unique)]
    pub card_uid: Option<String>,
    /// Token presented by the mobile app.
    #[sea_orm(unique)]
    pub mobile_token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        card_uid: Option<&str>,
        mobile_token: Option<&str>,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
            card_uid: Set(card_uid.map(str::to_owned)),
            mobile_token: Set(mobile_token.map(str::to_owned)),
        }
        .insert(db)
        .await
    }

    pub async fn all_by_name(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::Name).all(db).await
    }

    /// Resolves a tapped credential, matching either the card UID or the mobile token.
    pub async fn find_by_credential(
        db: &DatabaseConnection,
        credential: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(
                Condition::any()
                    .add(Column::CardUid.eq(credential))
                    .add(Column::MobileToken.eq(credential)),
            )
            .one(db)
            .await
    }
}
