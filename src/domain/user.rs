use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Client the account was last active from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceType {
    Android,
    #[serde(rename = "iOS")]
    Ios,
    Web,
}

/// Verification tier shown on the users page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserTier {
    Regular,
    Verified,
    Subscription,
    Moderator,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub fullname: String,
    pub username: String,
    pub device_type: DeviceType,
    pub is_moderator: bool,
    pub profile_image: String,
    pub tier: UserTier,
}

impl User {
    pub fn is_verified(&self) -> bool {
        self.tier == UserTier::Verified
    }

    pub fn is_subscriber(&self) -> bool {
        self.tier == UserTier::Subscription
    }
}
