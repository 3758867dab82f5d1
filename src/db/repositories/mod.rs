use async_trait::async_trait;

use crate::db::DbResult;
use crate::db::models::leaderboard::LeaderboardEntry;
use crate::db::models::report::{Report, ReportId, UserId};

pub mod leaderboard;
pub mod report;

/// The two contracts this service consumes from the backing document store:
/// a keyset-paginated scan of verified reports and a field-level merge-upsert
/// of a user's leaderboard entry.
///
/// Jobs are written against this trait so the store can be swapped for an
/// in-memory layer under test.
#[async_trait]
pub trait DocumentStore {
    /// One page of verified reports ordered by id, strictly after `cursor`
    /// (or from the beginning when `cursor` is `None`).
    async fn verified_reports_after(
        &self,
        cursor: Option<&ReportId>,
        limit: i64,
    ) -> DbResult<Vec<Report>>;

    /// Merge `{points, last_updated = now}` into the entry keyed by
    /// `user_id`, creating it if absent. Fields outside those two are left
    /// untouched.
    async fn merge_leaderboard_points(
        &self,
        user_id: &UserId,
        points: i64,
    ) -> DbResult<LeaderboardEntry>;
}
