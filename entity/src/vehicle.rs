use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize, serde::Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub model: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ecu::Entity")]
    Ecu,
}

impl Related<super::ecu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ecu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
