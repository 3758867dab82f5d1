use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::report::UserId;

/// Per-user points snapshot, recomputed wholesale by the weekly aggregation
/// run. `points` and `last_updated` are the only fields the job ever writes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub points: i64,
    pub last_updated: NaiveDateTime,
}
