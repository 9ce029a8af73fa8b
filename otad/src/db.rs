use otaguard_common::config;
use otaguard_common::db::{CreationMode, Database};
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[command(flatten)]
    pub(crate) database: config::Database,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Drop and re-create the database, then migrate
    Create,
    /// Apply pending migrations
    Migrate,
    /// Re-apply the full schema from scratch
    Refresh,
    /// Check database connectivity
    Ping,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        use Command::*;
        match self.command {
            Create => self.config(CreationMode::Bootstrap).await,
            Migrate => self.config(CreationMode::Default).await,
            Refresh => self.config(CreationMode::RefreshSchema).await,
            Ping => self.ping().await,
        }
    }

    async fn config(self, mode: CreationMode) -> anyhow::Result<ExitCode> {
        let db = Database::with_external_config(&self.database, mode).await?;
        db.close().await?;
        Ok(ExitCode::SUCCESS)
    }

    async fn ping(self) -> anyhow::Result<ExitCode> {
        let db = Database::new(&self.database).await?;
        db.ping().await?;
        log::info!("database '{}' is reachable", db.name());
        db.close().await?;
        Ok(ExitCode::SUCCESS)
    }
}
