use otaguard_common::db::Database;
use otaguard_entity::{dependency_rule, ecu, update_package, vehicle};
use sea_orm::{ActiveValue::Set, EntityTrait};

/// Insert a small, well-known data set for local development.
///
/// V001 carries a BCM new enough for the sample package, V002 does not, so a
/// `/check-update` call against each vehicle exercises both verdicts.
pub async fn sample_data(db: &Database) -> anyhow::Result<()> {
    let conn = db.connection();

    // reset in dependency order
    dependency_rule::Entity::delete_many().exec(conn).await?;
    update_package::Entity::delete_many().exec(conn).await?;
    ecu::Entity::delete_many().exec(conn).await?;
    vehicle::Entity::delete_many().exec(conn).await?;

    vehicle::Entity::insert_many([
        vehicle::ActiveModel {
            id: Set("V001".into()),
            model: Set("IONIQ6".into()),
            status: Set("READY".into()),
        },
        vehicle::ActiveModel {
            id: Set("V002".into()),
            model: Set("GV80".into()),
            status: Set("READY".into()),
        },
    ])
    .exec(conn)
    .await?;

    ecu::Entity::insert_many([
        ecu_row(1, "V001", "BMS", 2, 0, 0),
        ecu_row(2, "V001", "BCM", 1, 5, 0),
        ecu_row(3, "V002", "BMS", 2, 0, 0),
        ecu_row(4, "V002", "BCM", 1, 0, 0),
    ])
    .exec(conn)
    .await?;

    update_package::Entity::insert(update_package::ActiveModel {
        id: Set("PKG_BMS_30".into()),
        target_type: Set("BMS".into()),
        major: Set(3),
        minor: Set(0),
        patch: Set(0),
    })
    .exec(conn)
    .await?;

    // installing BMS 3.0 requires a BCM of at least 1.2.0
    dependency_rule::Entity::insert(dependency_rule::ActiveModel {
        id: Set(101),
        package_id: Set("PKG_BMS_30".into()),
        required_type: Set("BCM".into()),
        min_major: Set(1),
        min_minor: Set(2),
        min_patch: Set(0),
    })
    .exec(conn)
    .await?;

    log::info!("sample data inserted");

    Ok(())
}

fn ecu_row(
    id: i32,
    vehicle_id: &str,
    ecu_type: &str,
    major: i32,
    minor: i32,
    patch: i32,
) -> ecu::ActiveModel {
    ecu::ActiveModel {
        id: Set(id),
        vehicle_id: Set(vehicle_id.into()),
        r#type: Set(ecu_type.into()),
        major: Set(major),
        minor: Set(minor),
        patch: Set(patch),
    }
}
