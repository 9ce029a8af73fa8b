use otaguard_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, DbErr, Statement};

/// Failure to establish a database connection.
///
/// Connection problems are surfaced to the caller instead of being swallowed;
/// the validation core never takes this path.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("failed to connect to {url}: {source}")]
    Connect { url: String, source: DbErr },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum CreationMode {
    /// Connect and apply pending migrations
    Default,
    /// Drop and re-create the database, then migrate
    Bootstrap,
    /// Re-apply the full schema from scratch
    RefreshSchema,
}

#[derive(Clone, Debug)]
pub struct Database {
    /// the database connection
    db: DatabaseConnection,
    /// the database name
    name: String,
}

impl Database {
    pub async fn new(database: &crate::config::Database) -> Result<Self, ConnectError> {
        let url = database.to_url();
        log::debug!("connect to {}:{}/{}", database.host, database.port, database.name);

        let mut opt = ConnectOptions::new(url.clone());
        opt.sqlx_logging_level(log::LevelFilter::Trace);

        let db = sea_orm::Database::connect(opt)
            .await
            .map_err(|source| ConnectError::Connect { url, source })?;
        let name = database.name.clone();

        Ok(Self { db, name })
    }

    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        log::debug!("applying migrations");
        Migrator::up(&self.db, None).await?;
        log::debug!("applied migrations");

        Ok(())
    }

    pub async fn refresh(&self) -> Result<(), anyhow::Error> {
        log::warn!("refreshing database schema...");
        Migrator::refresh(&self.db).await?;
        log::warn!("refreshing database schema... done!");

        Ok(())
    }

    pub async fn bootstrap(database: &crate::config::Database) -> Result<Self, anyhow::Error> {
        let url = crate::config::Database {
            name: "postgres".into(),
            ..database.clone()
        }
        .to_url();

        log::debug!("bootstrap via postgres system database");
        let db = sea_orm::Database::connect(url).await?;

        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!("DROP DATABASE IF EXISTS \"{}\";", database.name),
        ))
        .await?;

        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!("CREATE DATABASE \"{}\";", database.name),
        ))
        .await?;
        db.close().await?;

        let db = Self::new(database).await?;
        db.migrate().await?;

        Ok(db)
    }

    pub async fn with_external_config(
        database: &crate::config::Database,
        mode: CreationMode,
    ) -> Result<Self, anyhow::Error> {
        match mode {
            CreationMode::Default => {
                let db = Self::new(database).await?;
                db.migrate().await?;
                Ok(db)
            }
            CreationMode::Bootstrap => Self::bootstrap(database).await,
            CreationMode::RefreshSchema => {
                let db = Self::new(database).await?;
                db.refresh().await?;
                Ok(db)
            }
        }
    }

    pub async fn close(self) -> anyhow::Result<()> {
        Ok(self.db.close().await?)
    }

    /// Ping the database.
    ///
    /// Intended to be used for connectivity checks.
    pub async fn ping(&self) -> anyhow::Result<()> {
        use anyhow::Context;
        self.db.ping().await.context("failed to ping the database")?;
        Ok(())
    }

    /// Get the name of the database
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
