use core::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct ReportId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct UserId(pub String);

/// Moderation state of a report. Only `Verified` reports count toward the
/// leaderboard; transitions happen in an external moderation process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Error)]
#[error("unknown report status '{0}'")]
pub struct UnknownStatus(pub String);

impl ReportStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Verified => "verified",
            ReportStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ReportStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReportStatus::Pending),
            "verified" => Ok(ReportStatus::Verified),
            "rejected" => Ok(ReportStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Incident category chosen by the reporter. Informational only, so parsing
/// is total: anything unrecognized folds into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Cutting,
    Dumping,
    Other,
}

impl From<&str> for ReportKind {
    fn from(value: &str) -> Self {
        match value {
            "cutting" => ReportKind::Cutting,
            "dumping" => ReportKind::Dumping,
            _ => ReportKind::Other,
        }
    }
}

/// A citizen incident report as submitted through the frontend and moderated
/// externally. Immutable for aggregation purposes once verified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub user_id: UserId,
    pub status: ReportStatus,
    pub kind: ReportKind,
    pub description: String,
    pub photo_path: Option<String>,
    pub source: String,
    pub lat: f64,
    pub lng: f64,
    pub severity: i16,
    pub created_at: NaiveDateTime,
}

/// Raw `report` row; `status` and `kind` come back as text and are narrowed
/// when converting into [`Report`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportRow {
    pub id: ReportId,
    pub user_id: UserId,
    pub status: String,
    pub kind: String,
    pub description: String,
    pub photo_path: Option<String>,
    pub source: String,
    pub lat: f64,
    pub lng: f64,
    pub severity: i16,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ReportRow> for Report {
    type Error = UnknownStatus;

    fn try_from(row: ReportRow) -> Result<Self, Self::Error> {
        Ok(Report {
            id: row.id,
            user_id: row.user_id,
            status: row.status.parse()?,
            kind: ReportKind::from(row.kind.as_str()),
            description: row.description,
            photo_path: row.photo_path,
            source: row.source,
            lat: row.lat,
            lng: row.lng,
            severity: row.severity,
            created_at: row.created_at,
        })
    }
}

impl From<String> for ReportId {
    fn from(value: String) -> Self {
        ReportId(value)
    }
}

impl From<&str> for ReportId {
    fn from(value: &str) -> Self {
        ReportId(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::*;

    fn row(status: &str, kind: &str) -> ReportRow {
        ReportRow {
            id: "r-1".into(),
            user_id: "u-1".into(),
            status: status.to_string(),
            kind: kind.to_string(),
            description: "mangrove cutting near the creek".to_string(),
            photo_path: None,
            source: "citizen".to_string(),
            lat: 21.17,
            lng: 72.63,
            severity: 3,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn status_parsing_is_strict() {
        assert_eq!("verified".parse::<ReportStatus>().unwrap(), ReportStatus::Verified);
        assert_eq!("pending".parse::<ReportStatus>().unwrap(), ReportStatus::Pending);
        assert_eq!("rejected".parse::<ReportStatus>().unwrap(), ReportStatus::Rejected);

        let err = "Verified".parse::<ReportStatus>().unwrap_err();
        assert_eq!(err.0, "Verified");
    }

    #[test]
    fn kind_parsing_is_lenient() {
        assert_eq!(ReportKind::from("cutting"), ReportKind::Cutting);
        assert_eq!(ReportKind::from("dumping"), ReportKind::Dumping);
        assert_eq!(ReportKind::from("sewage"), ReportKind::Other);
    }

    #[test]
    fn row_conversion_narrows_status() {
        let report = Report::try_from(row("verified", "cutting")).unwrap();
        assert_eq!(report.status, ReportStatus::Verified);
        assert_eq!(report.kind, ReportKind::Cutting);

        assert!(Report::try_from(row("approved", "cutting")).is_err());
    }
}
