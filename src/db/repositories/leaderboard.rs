use sqlx::PgPool;
use tracing::instrument;

use crate::db::DbResult;
use crate::db::models::leaderboard::LeaderboardEntry;
use crate::db::models::report::UserId;

pub struct LeaderboardRepository {
    pool: PgPool,
}

impl LeaderboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Merge-upsert a user's snapshot. The `DO UPDATE` touches only `points`
    /// and `last_updated`, so anything else stored on the row survives a
    /// refresh. `NOW()` keeps the timestamp server-generated.
    #[instrument(skip(self), fields(user = %user_id))]
    pub async fn merge_points(
        &self,
        user_id: &UserId,
        points: i64,
    ) -> DbResult<LeaderboardEntry> {
        let entry = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            INSERT INTO leaderboard (
                user_id,
                points,
                last_updated
            )
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET
                points = EXCLUDED.points,
                last_updated = NOW()
            RETURNING
                user_id,
                points,
                last_updated
            "#,
        )
        .bind(user_id)
        .bind(points)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }
}
