use thiserror::Error;

use crate::db::DbErr;
use crate::db::models::report::UserId;

pub mod leaderboard;

pub type JobResult<T> = core::result::Result<T, JobErr>;

/// A read failure aborts the run before further writes; a write failure
/// aborts the remaining writes and names the entry it died on. Prior writes
/// in the same run stay committed either way; retry policy belongs to the
/// external scheduler.
#[derive(Debug, Error)]
pub enum JobErr {
    #[error("failed to read verified reports: {0}")]
    Read(#[source] DbErr),

    #[error("failed to refresh leaderboard entry for user '{user_id}': {source}")]
    Write {
        user_id: UserId,
        #[source]
        source: DbErr,
    },
}
