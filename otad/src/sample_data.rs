use otaguard_common::{config, db::Database};
use std::process::ExitCode;

/// Insert the sample vehicle/package data set
#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(flatten)]
    pub(crate) database: config::Database,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let db = Database::new(&self.database).await?;
        otaguard_server::sample_data::sample_data(&db).await?;
        db.close().await?;
        Ok(ExitCode::SUCCESS)
    }
}
