//! DTOs for the music page, which hosts a tracks and a categories table.

use serde::Serialize;

use crate::domain::action::EntityKind;
use crate::domain::music::{MusicCategory, MusicTrack};
use crate::dto::table::TableOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicTab {
    #[default]
    Music,
    Categories,
}

impl MusicTab {
    /// Unknown values select the default tab.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("categories") => MusicTab::Categories,
            _ => MusicTab::Music,
        }
    }

    pub fn entity(self) -> EntityKind {
        match self {
            MusicTab::Music => EntityKind::Tracks,
            MusicTab::Categories => EntityKind::Categories,
        }
    }
}

/// Exactly one of the tables is loaded, depending on the active tab.
#[derive(Debug)]
pub enum MusicTable {
    Tracks(TableOutcome<MusicTrack>),
    Categories(TableOutcome<MusicCategory>),
}

#[derive(Debug)]
pub struct MusicPageData {
    pub tab: MusicTab,
    pub table: MusicTable,
}
