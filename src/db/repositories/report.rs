use sqlx::PgPool;
use tracing::instrument;

use crate::db::DbResult;
use crate::db::models::report::{Report, ReportId, ReportRow, ReportStatus};
use crate::db::repositories::DocumentStore;

const REPORT_FIELDS: &str = r#"
    id,
    user_id,
    status,
    kind,
    description,
    photo_path,
    source,
    lat,
    lng,
    severity,
    created_at
"#;

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Keyset-paginated scan of the verified set. Rows come back ordered by
    /// id so the last id of a page is the cursor for the next one.
    #[instrument(skip(self, cursor))]
    pub async fn verified_page(
        &self,
        cursor: Option<&ReportId>,
        limit: i64,
    ) -> DbResult<Vec<Report>> {
        let rows: Vec<ReportRow> = match cursor {
            Some(cursor) => {
                sqlx::query_as::<_, ReportRow>(&format!(
                    r#"
                    SELECT {REPORT_FIELDS}
                    FROM report
                    WHERE status = $1 AND id > $2
                    ORDER BY id ASC
                    LIMIT $3
                    "#
                ))
                .bind(ReportStatus::Verified.as_str())
                .bind(cursor)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ReportRow>(&format!(
                    r#"
                    SELECT {REPORT_FIELDS}
                    FROM report
                    WHERE status = $1
                    ORDER BY id ASC
                    LIMIT $2
                    "#
                ))
                .bind(ReportStatus::Verified.as_str())
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter()
            .map(|row| Report::try_from(row).map_err(Into::into))
            .collect()
    }
}

/// Lazy, finite sequence of verified-report pages pulled through a
/// [`DocumentStore`]. Exhausted or failed sequences stay exhausted; a fresh
/// walk needs a fresh value.
pub struct VerifiedReports<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
    cursor: Option<ReportId>,
    page_size: i64,
    done: bool,
}

impl<'a, S: DocumentStore + ?Sized> VerifiedReports<'a, S> {
    pub fn new(store: &'a S, page_size: i64) -> Self {
        Self {
            store,
            cursor: None,
            page_size,
            done: false,
        }
    }

    /// Next page of reports, `None` once the verified set is exhausted.
    pub async fn next_page(&mut self) -> DbResult<Option<Vec<Report>>> {
        if self.done {
            return Ok(None);
        }

        let page = match self
            .store
            .verified_reports_after(self.cursor.as_ref(), self.page_size)
            .await
        {
            Ok(page) => page,
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };

        if (page.len() as i64) < self.page_size {
            self.done = true;
        }

        match page.last() {
            Some(last) => {
                self.cursor = Some(last.id.clone());
                Ok(Some(page))
            }
            None => Ok(None),
        }
    }
}
