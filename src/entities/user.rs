use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub email_verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::action_token::Entity")]
    ActionToken,
    #[sea_orm(has_many = "super::progress::Entity")]
    Progress,
    #[sea_orm(has_one = "super::user_activity_streak::Entity")]
    UserActivityStreak,
}

impl Related<super::action_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActionToken.def()
    }
}

impl Related<super::progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Progress.def()
    }
}

impl Related<super::user_activity_streak::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserActivityStreak.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
