use sea_orm::entity::prelude::*;

/// Row of the `feedback` table. Column names follow [`crate::mapping::FEEDBACK`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_feedback")]
    pub id: i32,
    pub title: String,
    pub comment: String,
    #[sea_orm(column_name = "dateCreated")]
    pub date_created: Date,
    #[sea_orm(column_name = "isReaded")]
    pub is_read: bool,
    #[sea_orm(column_name = "id_user")]
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
