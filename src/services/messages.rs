//! Direct-message activity listing.

use crate::domain::message::MessageInsight;
use crate::dto::messages::MessagesPageData;
use crate::dto::table::TableQuery;
use crate::repository::MessageReader;
use crate::services::ServiceResult;
use crate::services::listing::open_table;
use crate::table::{ALL_FILTER, TableConfig, TableState};

fn searchable(insight: &MessageInsight) -> Vec<&str> {
    vec![insight.username.as_str(), insight.fullname.as_str()]
}

pub fn messages_table() -> TableConfig<MessageInsight> {
    TableConfig::new(searchable)
        .filter(ALL_FILTER, "All", |_: &MessageInsight| true)
        .filter("active", "Active", MessageInsight::is_active)
        .filter("flagged", "Flagged", MessageInsight::is_flagged)
        .filter("inactive", "Inactive", |insight: &MessageInsight| {
            !insight.is_active()
        })
}

/// Loads the header statistics and the activity table.
pub fn load_messages<R>(
    repo: &R,
    state: &mut TableState,
    query: &TableQuery,
) -> ServiceResult<MessagesPageData>
where
    R: MessageReader + ?Sized,
{
    let stats = repo.list_message_stats().map_err(|err| {
        log::error!("Failed to load message stats: {err}");
        err
    })?;
    let insights = repo.list_message_insights().map_err(|err| {
        log::error!("Failed to list message insights: {err}");
        err
    })?;

    Ok(MessagesPageData {
        stats,
        table: open_table("messages", insights, messages_table(), state, query),
    })
}
