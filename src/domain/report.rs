use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::ReportId;

/// Reported content, tagged by kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportTarget {
    Room { name: String },
    Post { title: String },
    User { name: String },
    Reel { title: String },
}

impl ReportTarget {
    /// Display name of the reported room, post, user or reel.
    pub fn name(&self) -> &str {
        match self {
            ReportTarget::Room { name } | ReportTarget::User { name } => name,
            ReportTarget::Post { title } | ReportTarget::Reel { title } => title,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ReportTarget::Room { .. } => "room",
            ReportTarget::Post { .. } => "post",
            ReportTarget::User { .. } => "user",
            ReportTarget::Reel { .. } => "reel",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Resolved,
    Dismissed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: ReportId,
    pub user_image: String,
    pub target: ReportTarget,
    pub user_identity: String,
    pub reason: String,
    pub description: String,
    pub created_at: NaiveDate,
    pub status: ReportStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_exposes_name_and_kind() {
        let target = ReportTarget::Reel {
            title: "Dance Challenge".to_string(),
        };

        assert_eq!(target.name(), "Dance Challenge");
        assert_eq!(target.kind(), "reel");
    }
}
