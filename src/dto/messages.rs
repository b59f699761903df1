use crate::domain::insight::TrendStat;
use crate::domain::message::MessageInsight;
use crate::dto::table::TableOutcome;

/// Data required to render the direct-messages page.
#[derive(Debug)]
pub struct MessagesPageData {
    pub stats: Vec<TrendStat>,
    pub table: TableOutcome<MessageInsight>,
}

