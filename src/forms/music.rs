//! Forms behind the "Add Music" and "Add Category" modals.

use serde::Deserialize;
use validator::Validate;

use crate::domain::music::{NewMusicCategory, NewMusicTrack};
use crate::domain::types::NonEmptyString;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct AddTrackForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(length(min = 3, max = 8))]
    pub duration: String,
    #[validate(length(min = 1, max = 200))]
    pub artist: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
}

/// Strips markup and surrounding whitespace from free-text input.
fn sanitize(value: &str) -> String {
    ammonia::clean(value.trim()).trim().to_string()
}

impl TryFrom<AddTrackForm> for NewMusicTrack {
    type Error = FormError;

    fn try_from(form: AddTrackForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            title: NonEmptyString::new(sanitize(&form.title))
                .map_err(|_| FormError::InvalidTitle)?,
            category: NonEmptyString::new(sanitize(&form.category))
                .map_err(|_| FormError::InvalidCategory)?,
            duration: form
                .duration
                .parse()
                .map_err(|_| FormError::InvalidDuration)?,
            artist: NonEmptyString::new(sanitize(&form.artist))
                .map_err(|_| FormError::InvalidArtist)?,
        })
    }
}

impl TryFrom<AddCategoryForm> for NewMusicCategory {
    type Error = FormError;

    fn try_from(form: AddCategoryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            title: NonEmptyString::new(sanitize(&form.title))
                .map_err(|_| FormError::InvalidTitle)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_form(title: &str, duration: &str) -> AddTrackForm {
        AddTrackForm {
            title: title.to_string(),
            category: "Pop".to_string(),
            duration: duration.to_string(),
            artist: "John Smith".to_string(),
        }
    }

    #[test]
    fn track_form_converts_to_payload() {
        let track = NewMusicTrack::try_from(track_form("  Summer Vibes ", "3:45")).unwrap();

        assert_eq!(track.title.as_str(), "Summer Vibes");
        assert_eq!(track.duration.seconds(), 225);
    }

    #[test]
    fn track_form_strips_markup() {
        let track =
            NewMusicTrack::try_from(track_form("Hit<script>alert('x')</script>", "2:05")).unwrap();

        assert_eq!(track.title.as_str(), "Hit");
    }

    #[test]
    fn track_form_rejects_bad_duration() {
        let result = NewMusicTrack::try_from(track_form("Song", "3:99"));

        assert!(matches!(result, Err(FormError::InvalidDuration)));
    }

    #[test]
    fn empty_category_title_fails_validation() {
        let result = NewMusicCategory::try_from(AddCategoryForm {
            title: String::new(),
        });

        assert!(matches!(result, Err(FormError::Validation(_))));
    }

    #[test]
    fn markup_only_title_is_rejected() {
        let result = NewMusicCategory::try_from(AddCategoryForm {
            title: "<script>x</script>".to_string(),
        });

        assert!(matches!(result, Err(FormError::InvalidTitle)));
    }
}
