use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "family_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub age_group: String,
    pub position: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub dietary_restrictions: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub allergies: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub allergy_severities: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub dislikes: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
