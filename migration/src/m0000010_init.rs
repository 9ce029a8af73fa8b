use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicle::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicle::Model).string().not_null())
                    .col(ColumnDef::new(Vehicle::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ecu::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ecu::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ecu::VehicleId).string().not_null())
                    .col(ColumnDef::new(Ecu::Type).string().not_null())
                    .col(ColumnDef::new(Ecu::Major).integer().not_null())
                    .col(ColumnDef::new(Ecu::Minor).integer().not_null())
                    .col(ColumnDef::new(Ecu::Patch).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ecu::Table, Ecu::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UpdatePackage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UpdatePackage::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UpdatePackage::TargetType).string().not_null())
                    .col(ColumnDef::new(UpdatePackage::Major).integer().not_null())
                    .col(ColumnDef::new(UpdatePackage::Minor).integer().not_null())
                    .col(ColumnDef::new(UpdatePackage::Patch).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DependencyRule::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DependencyRule::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DependencyRule::PackageId).string().not_null())
                    .col(
                        ColumnDef::new(DependencyRule::RequiredType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DependencyRule::MinMajor).integer().not_null())
                    .col(ColumnDef::new(DependencyRule::MinMinor).integer().not_null())
                    .col(ColumnDef::new(DependencyRule::MinPatch).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(DependencyRule::Table, DependencyRule::PackageId)
                            .to(UpdatePackage::Table, UpdatePackage::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DependencyRule::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UpdatePackage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ecu::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    // --
    Model,
    Status,
}

#[derive(DeriveIden)]
pub enum Ecu {
    Table,
    Id,
    // --
    VehicleId,
    Type,
    Major,
    Minor,
    Patch,
}

#[derive(DeriveIden)]
pub enum UpdatePackage {
    Table,
    Id,
    // --
    TargetType,
    Major,
    Minor,
    Patch,
}

#[derive(DeriveIden)]
pub enum DependencyRule {
    Table,
    Id,
    // --
    PackageId,
    RequiredType,
    MinMajor,
    MinMinor,
    MinPatch,
}
