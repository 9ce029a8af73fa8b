use clap::Parser;
use std::process::{ExitCode, Termination};

mod db;
mod sample_data;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Manage the database schema
    Db(db::Run),
    /// Insert sample data
    Seed(sample_data::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "otad",
    long_about = None
)]
pub struct Otad {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// Bootstrap the database and insert sample data before serving
    #[arg(long, env)]
    pub devmode: bool,

    #[command(flatten)]
    pub database: otaguard_common::config::Database,

    #[command(flatten)]
    pub http: otaguard_server::HttpServerConfig,
}

impl Otad {
    async fn run(self) -> ExitCode {
        otaguard_server::tracing::init_tracing();

        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Db(run)) => run.run().await,
            Some(Command::Seed(run)) => run.run().await,
            None => {
                let server = otaguard_server::Run {
                    database: self.database,
                    http: self.http,
                    devmode: self.devmode,
                };
                server.run().await?;

                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[actix_web::main]
async fn main() -> impl Termination {
    Otad::parse().run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Otad::command().debug_assert();
    }
}
