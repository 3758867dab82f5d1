use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::db::models::leaderboard::LeaderboardEntry;
use crate::db::models::report::{Report, ReportId, UnknownStatus, UserId};
use crate::db::repositories::DocumentStore;
use crate::db::repositories::leaderboard::LeaderboardRepository;
use crate::db::repositories::report::ReportRepository;
use crate::util::env::Env;

pub mod models;
pub mod repositories;

pub mod prelude {
    pub use crate::db::models::leaderboard::LeaderboardEntry;
    pub use crate::db::models::report::{Report, ReportId, ReportKind, ReportStatus, UserId};

    pub use crate::db::repositories::DocumentStore;
    pub use crate::db::repositories::leaderboard::LeaderboardRepository;
    pub use crate::db::repositories::report::{ReportRepository, VerifiedReports};

    pub use crate::db::{Db, DbErr, DbResult};
}

/// Backing-store client. Built once at process start and handed to whatever
/// needs it; there is deliberately no ambient/global instance.
pub struct Db {
    reports: ReportRepository,
    leaderboard: LeaderboardRepository,
}

impl Db {
    pub async fn connect(env: &Env) -> DbResult<Self> {
        let pool = PgPool::connect(&env.database_url).await?;

        Ok(Self {
            reports: ReportRepository::new(pool.clone()),
            leaderboard: LeaderboardRepository::new(pool),
        })
    }
}

#[async_trait]
impl DocumentStore for Db {
    async fn verified_reports_after(
        &self,
        cursor: Option<&ReportId>,
        limit: i64,
    ) -> DbResult<Vec<Report>> {
        self.reports.verified_page(cursor, limit).await
    }

    async fn merge_leaderboard_points(
        &self,
        user_id: &UserId,
        points: i64,
    ) -> DbResult<LeaderboardEntry> {
        self.leaderboard.merge_points(user_id, points).await
    }
}

pub type DbResult<T> = core::result::Result<T, DbErr>;

#[derive(Debug, Error)]
pub enum DbErr {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("failed to decode report row: {0}")]
    Decode(#[from] UnknownStatus),
}
