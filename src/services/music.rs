//! Music page: tracks and categories tables plus the add forms.

use crate::domain::music::{MusicCategory, MusicTrack, NewMusicCategory, NewMusicTrack};
use crate::dto::music::{MusicPageData, MusicTab, MusicTable};
use crate::dto::table::TableQuery;
use crate::forms::music::{AddCategoryForm, AddTrackForm};
use crate::repository::{ActionDispatcher, MusicReader};
use crate::services::ServiceResult;
use crate::services::listing::open_table;
use crate::table::{TableConfig, TableState};

fn track_searchable(track: &MusicTrack) -> Vec<&str> {
    vec![
        track.title.as_str(),
        track.artist.as_str(),
        track.category.as_str(),
    ]
}

fn category_searchable(category: &MusicCategory) -> Vec<&str> {
    vec![category.title.as_str()]
}

pub fn tracks_table() -> TableConfig<MusicTrack> {
    TableConfig::new(track_searchable)
}

pub fn categories_table() -> TableConfig<MusicCategory> {
    TableConfig::new(category_searchable)
}

/// Loads the table behind the active `tab`; `state` belongs to that table.
pub fn load_music<R>(
    repo: &R,
    tab: MusicTab,
    state: &mut TableState,
    query: &TableQuery,
) -> ServiceResult<MusicPageData>
where
    R: MusicReader + ?Sized,
{
    let table = match tab {
        MusicTab::Music => {
            let tracks = repo.list_tracks().map_err(|err| {
                log::error!("Failed to list tracks: {err}");
                err
            })?;
            MusicTable::Tracks(open_table("tracks", tracks, tracks_table(), state, query))
        }
        MusicTab::Categories => {
            let categories = repo.list_categories().map_err(|err| {
                log::error!("Failed to list music categories: {err}");
                err
            })?;
            MusicTable::Categories(open_table(
                "categories",
                categories,
                categories_table(),
                state,
                query,
            ))
        }
    };

    Ok(MusicPageData { tab, table })
}

/// Validates the "Add Music" form and forwards the track.
pub fn add_track<R>(repo: &R, form: AddTrackForm) -> ServiceResult<()>
where
    R: ActionDispatcher + ?Sized,
{
    let track = NewMusicTrack::try_from(form).map_err(|err| {
        log::error!("Failed to validate track form: {err}");
        err
    })?;

    repo.submit_track(&track).map_err(|err| {
        log::error!("Failed to submit track: {err}");
        err
    })?;

    Ok(())
}

/// Validates the "Add Category" form and forwards the category.
pub fn add_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<()>
where
    R: ActionDispatcher + ?Sized,
{
    let category = NewMusicCategory::try_from(form).map_err(|err| {
        log::error!("Failed to validate category form: {err}");
        err
    })?;

    repo.submit_category(&category)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SampleRepository;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn tracks_search_covers_artist_and_category() {
        let repo = SampleRepository::new().unwrap();
        let query = TableQuery {
            search: Some("jazz".to_string()),
            ..TableQuery::default()
        };

        let data = load_music(&repo, MusicTab::Music, &mut TableState::default(), &query).unwrap();

        match data.table {
            MusicTable::Tracks(outcome) => {
                assert_eq!(outcome.page.rows.total, 1);
                assert_eq!(outcome.page.rows.items[0].artist, "Sarah Johnson");
            }
            MusicTable::Categories(_) => panic!("expected tracks table"),
        }
    }

    #[test]
    fn categories_tab_loads_categories_only() {
        let mut repo = MockRepository::new();
        repo.expect_list_tracks().never();
        repo.expect_list_categories().returning(|| Ok(Vec::new()));

        let data = load_music(
            &repo,
            MusicTab::Categories,
            &mut TableState::default(),
            &TableQuery::default(),
        )
        .unwrap();

        assert_eq!(data.tab, MusicTab::Categories);
        assert!(matches!(data.table, MusicTable::Categories(ref t) if t.page.rows.total == 0));
    }

    #[test]
    fn add_track_submits_sanitized_track() {
        let mut repo = MockRepository::new();
        repo.expect_submit_track()
            .withf(|track| track.title.as_str() == "Summer Vibes" && track.duration.seconds() == 225)
            .times(1)
            .returning(|_| Ok(()));

        let form = AddTrackForm {
            title: " Summer Vibes ".to_string(),
            category: "Pop".to_string(),
            duration: "3:45".to_string(),
            artist: "John Smith".to_string(),
        };

        assert!(add_track(&repo, form).is_ok());
    }

    #[test]
    fn invalid_track_is_not_submitted() {
        let mut repo = MockRepository::new();
        repo.expect_submit_track().never();

        let form = AddTrackForm {
            title: "Summer Vibes".to_string(),
            category: "Pop".to_string(),
            duration: "3:99".to_string(),
            artist: "John Smith".to_string(),
        };

        assert!(matches!(add_track(&repo, form), Err(ServiceError::Form(_))));
    }

    #[test]
    fn add_category_forwards_title() {
        let mut repo = MockRepository::new();
        repo.expect_submit_category()
            .withf(|category| category.title.as_str() == "Lo-fi")
            .returning(|_| Ok(()));

        let form = AddCategoryForm {
            title: "Lo-fi".to_string(),
        };

        assert!(add_category(&repo, form).is_ok());
    }
}
