use std::collections::BTreeMap;

use tracing::instrument;

use crate::db::prelude::{DocumentStore, Report, ReportStatus, UserId, VerifiedReports};
use crate::jobs::{JobErr, JobResult};

pub const POINTS_PER_VERIFIED_REPORT: i64 = 10;

/// Per-run accumulation of points, keyed by reporting user. Only verified
/// reports are recorded; everything else falls through untouched.
#[derive(Debug, Default)]
pub struct PointsTally {
    totals: BTreeMap<UserId, i64>,
    verified: usize,
}

impl PointsTally {
    pub fn record(&mut self, report: &Report) {
        if report.status != ReportStatus::Verified {
            return;
        }

        *self.totals.entry(report.user_id.clone()).or_insert(0) += POINTS_PER_VERIFIED_REPORT;
        self.verified += 1;
    }

    pub fn points_for(&self, user_id: &UserId) -> i64 {
        self.totals.get(user_id).copied().unwrap_or(0)
    }

    fn into_parts(self) -> (BTreeMap<UserId, i64>, usize) {
        (self.totals, self.verified)
    }
}

/// What a completed run saw. Feeds the success log line only; the contract
/// toward the scheduler stays exit-code-shaped.
#[derive(Debug, Clone, Copy)]
pub struct RefreshSummary {
    pub verified_reports: usize,
    pub reporters: usize,
}

/// The weekly batch job: scan every verified report, tally 10 points apiece
/// per reporter, merge the totals back into the per-user leaderboard rows.
///
/// Each run recomputes every tally from scratch, so rerunning on unchanged
/// reports lands on identical points. Users without a verified report are
/// neither created nor zeroed, and an entry that stops earning points keeps
/// its last snapshot.
pub struct LeaderboardAggregator<'a, S: DocumentStore> {
    store: &'a S,
    page_size: i64,
}

impl<'a, S: DocumentStore> LeaderboardAggregator<'a, S> {
    pub fn new(store: &'a S, page_size: i64) -> Self {
        Self { store, page_size }
    }

    /// One full aggregation pass. Upserts run sequentially with no cross-row
    /// transaction; on a write failure the entries already merged stay
    /// committed and the error names the user the run died on.
    #[instrument(skip(self))]
    pub async fn run(&self) -> JobResult<RefreshSummary> {
        let mut pages = VerifiedReports::new(self.store, self.page_size);
        let mut tally = PointsTally::default();

        while let Some(page) = pages.next_page().await.map_err(JobErr::Read)? {
            tracing::debug!(count = page.len(), "tallying verified report page");
            for report in &page {
                tally.record(report);
            }
        }

        let (totals, verified_reports) = tally.into_parts();
        let reporters = totals.len();

        for (user_id, points) in totals {
            match self.store.merge_leaderboard_points(&user_id, points).await {
                Ok(entry) => {
                    tracing::debug!(user = %entry.user_id, points = entry.points, "entry refreshed");
                }
                Err(e) => {
                    tracing::error!(error = ?e, user = %user_id, "aborting leaderboard refresh");
                    return Err(JobErr::Write { user_id, source: e });
                }
            }
        }

        Ok(RefreshSummary {
            verified_reports,
            reporters,
        })
    }
}
