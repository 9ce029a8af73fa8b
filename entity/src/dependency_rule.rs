use sea_orm::entity::prelude::*;

/// A minimum-version precondition an update package places on one ECU type.
///
/// All three version fields are integers; sample data carrying anything else
/// is rejected by the schema.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize, serde::Deserialize)]
#[sea_orm(table_name = "dependency_rule")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub package_id: String,
    pub required_type: String,
    pub min_major: i32,
    pub min_minor: i32,
    pub min_patch: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::update_package::Entity",
        from = "Column::PackageId",
        to = "super::update_package::Column::Id"
    )]
    UpdatePackage,
}

impl Related<super::update_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UpdatePackage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
