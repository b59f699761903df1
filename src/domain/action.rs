//! Row actions forwarded from listing pages to the action handler.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Kind of record a row action targets; parsed from the URL segment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Users,
    Posts,
    Reports,
    Messages,
    Tracks,
    Categories,
    Bookmarks,
    Follows,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    View,
    Delete,
    Block,
    Flag,
    Resolve,
    ToggleModerator,
    ToggleRestricted,
}

impl EntityKind {
    pub fn slug(self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Posts => "posts",
            EntityKind::Reports => "reports",
            EntityKind::Messages => "messages",
            EntityKind::Tracks => "tracks",
            EntityKind::Categories => "categories",
            EntityKind::Bookmarks => "bookmarks",
            EntityKind::Follows => "follows",
        }
    }

    /// Actions offered by the rows of this entity's table.
    pub fn actions(self) -> &'static [ActionKind] {
        use ActionKind::*;

        match self {
            EntityKind::Users => &[View, Block, ToggleModerator],
            EntityKind::Posts => &[View, Delete, ToggleRestricted],
            EntityKind::Reports => &[View, Delete, Resolve],
            EntityKind::Messages => &[View, Block, Flag],
            EntityKind::Tracks | EntityKind::Categories => &[View, Delete],
            EntityKind::Bookmarks | EntityKind::Follows => &[View],
        }
    }

    pub fn supports(self, action: ActionKind) -> bool {
        self.actions().contains(&action)
    }

    /// Listing the entity's rows are rendered on.
    pub fn listing_path(self) -> &'static str {
        match self {
            EntityKind::Users => "/users",
            EntityKind::Posts => "/posts",
            EntityKind::Reports => "/reports",
            EntityKind::Messages => "/messages",
            EntityKind::Tracks => "/music?tab=music",
            EntityKind::Categories => "/music?tab=categories",
            EntityKind::Bookmarks => "/insights?tab=bookmarks",
            EntityKind::Follows => "/insights?tab=follows",
        }
    }
}

impl ActionKind {
    pub fn slug(self) -> &'static str {
        match self {
            ActionKind::View => "view",
            ActionKind::Delete => "delete",
            ActionKind::Block => "block",
            ActionKind::Flag => "flag",
            ActionKind::Resolve => "resolve",
            ActionKind::ToggleModerator => "toggle-moderator",
            ActionKind::ToggleRestricted => "toggle-restricted",
        }
    }
}

impl FromStr for EntityKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(EntityKind::Users),
            "posts" => Ok(EntityKind::Posts),
            "reports" => Ok(EntityKind::Reports),
            "messages" => Ok(EntityKind::Messages),
            "tracks" => Ok(EntityKind::Tracks),
            "categories" => Ok(EntityKind::Categories),
            "bookmarks" => Ok(EntityKind::Bookmarks),
            "follows" => Ok(EntityKind::Follows),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown entity {other}"
            ))),
        }
    }
}

impl FromStr for ActionKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(ActionKind::View),
            "delete" => Ok(ActionKind::Delete),
            "block" => Ok(ActionKind::Block),
            "flag" => Ok(ActionKind::Flag),
            "resolve" => Ok(ActionKind::Resolve),
            "toggle-moderator" => Ok(ActionKind::ToggleModerator),
            "toggle-restricted" => Ok(ActionKind::ToggleRestricted),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown action {other}"
            ))),
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A user-triggered action on one row, addressed by record id.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RowAction {
    pub entity: EntityKind,
    pub id: i32,
    pub action: ActionKind,
}

impl RowAction {
    /// Validates the id and that `entity` offers `action`.
    pub fn new(
        entity: EntityKind,
        id: i32,
        action: ActionKind,
    ) -> Result<Self, TypeConstraintError> {
        if id <= 0 {
            return Err(TypeConstraintError::NonPositiveId);
        }
        if !entity.supports(action) {
            return Err(TypeConstraintError::InvalidValue(format!(
                "{entity} do not support {action}"
            )));
        }

        Ok(Self { entity, id, action })
    }
}

impl Display for RowAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} #{}", self.action, self.entity, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_parse_back() {
        for entity in [
            EntityKind::Users,
            EntityKind::Tracks,
            EntityKind::Follows,
        ] {
            assert_eq!(entity.slug().parse::<EntityKind>(), Ok(entity));
        }
        assert_eq!(
            "toggle-moderator".parse::<ActionKind>(),
            Ok(ActionKind::ToggleModerator)
        );
        assert!("ban".parse::<ActionKind>().is_err());
    }

    #[test]
    fn row_action_checks_support_and_id() {
        assert!(RowAction::new(EntityKind::Reports, 3, ActionKind::Resolve).is_ok());
        assert!(matches!(
            RowAction::new(EntityKind::Users, 3, ActionKind::Resolve),
            Err(TypeConstraintError::InvalidValue(_))
        ));
        assert_eq!(
            RowAction::new(EntityKind::Users, 0, ActionKind::View),
            Err(TypeConstraintError::NonPositiveId)
        );
    }

    #[test]
    fn display_names_action_and_target() {
        let action = RowAction::new(EntityKind::Users, 4, ActionKind::Block).unwrap();

        assert_eq!(action.to_string(), "block users #4");
    }
}
