use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, NonEmptyString, TrackDuration, TrackId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MusicTrack {
    pub id: TrackId,
    pub title: String,
    pub category: String,
    pub duration: TrackDuration,
    pub artist: String,
    pub created_at: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MusicCategory {
    pub id: CategoryId,
    pub title: String,
    pub music_count: u32,
    pub created_at: NaiveDate,
}

/// Track submitted through the "Add Music" form.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMusicTrack {
    pub title: NonEmptyString,
    pub category: NonEmptyString,
    pub duration: TrackDuration,
    pub artist: NonEmptyString,
}

/// Category submitted through the "Add Category" form.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMusicCategory {
    pub title: NonEmptyString,
}
