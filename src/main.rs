use thiserror::Error;

use crate::db::prelude::{Db, DbErr};
use crate::jobs::JobErr;
use crate::jobs::leaderboard::LeaderboardAggregator;
use crate::util::env::{Env, EnvErr};

mod args;
mod db;
mod jobs;
mod util;

#[derive(Debug, Error)]
enum RunnerErr {
    #[error(transparent)]
    Env(#[from] EnvErr),

    #[error(transparent)]
    Db(#[from] DbErr),

    #[error(transparent)]
    Job(#[from] JobErr),
}

type Result<T> = core::result::Result<T, RunnerErr>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = args::parse_cli_args();
    util::telemetry::init();

    let env = Env::from_env()?;
    let db = Db::connect(&env).await?;

    let page_size = cli.page_size.unwrap_or(env.report_page_size);
    let aggregator = LeaderboardAggregator::new(&db, page_size);

    match aggregator.run().await {
        Ok(summary) => {
            tracing::info!(
                reporters = summary.reporters,
                verified_reports = summary.verified_reports,
                "leaderboard updated successfully"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = ?e, "leaderboard refresh failed");
            Err(e.into())
        }
    }
}
