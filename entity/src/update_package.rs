use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize, serde::Deserialize)]
#[sea_orm(table_name = "update_package")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub target_type: String,
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dependency_rule::Entity")]
    DependencyRule,
}

impl Related<super::dependency_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DependencyRule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
