use serde::{Deserialize, Serialize};

use crate::domain::types::MessageInsightId;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityStatus {
    VeryActive,
    Active,
    Inactive,
}

/// Direct-message activity of a single user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageInsight {
    pub id: MessageInsightId,
    pub username: String,
    pub fullname: String,
    pub messages_sent: u32,
    pub messages_received: u32,
    pub activity: ActivityStatus,
    pub last_active: String,
    /// Set when the conversation was flagged by moderation.
    pub flag_reason: Option<String>,
}

impl MessageInsight {
    pub fn is_flagged(&self) -> bool {
        self.flag_reason.is_some()
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.activity,
            ActivityStatus::VeryActive | ActivityStatus::Active
        )
    }
}
