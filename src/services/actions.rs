//! Row actions triggered from the listing tables.

use crate::domain::action::{ActionKind, EntityKind, RowAction};
use crate::forms::actions::BulkActionForm;
use crate::repository::ActionDispatcher;
use crate::services::{ServiceError, ServiceResult};

/// Parses the URL segments into a [`RowAction`] and forwards it.
pub fn dispatch_action<R>(repo: &R, entity: &str, id: i32, action: &str) -> ServiceResult<RowAction>
where
    R: ActionDispatcher + ?Sized,
{
    let entity: EntityKind = entity.parse()?;
    let action: ActionKind = action.parse()?;
    let row_action = RowAction::new(entity, id, action)?;

    repo.dispatch(&row_action).map_err(|err| {
        log::error!("Failed to dispatch {row_action}: {err}");
        err
    })?;

    Ok(row_action)
}

/// Applies one action to every selected row.
///
/// Every row is validated and looked up before the first one is
/// dispatched, so an unknown id rejects the whole batch. Returns the number
/// of dispatched actions.
pub fn dispatch_bulk_action<R>(repo: &R, entity: EntityKind, body: &[u8]) -> ServiceResult<usize>
where
    R: ActionDispatcher + ?Sized,
{
    let form = BulkActionForm::parse(body)?;
    let action: ActionKind = form.action.parse()?;

    let row_actions = form
        .ids
        .iter()
        .map(|id| RowAction::new(entity, *id, action))
        .collect::<Result<Vec<_>, _>>()?;

    for row_action in &row_actions {
        if !repo.row_exists(row_action.entity, row_action.id)? {
            log::warn!("Rejecting bulk {action}: {entity} #{} does not exist", row_action.id);
            return Err(ServiceError::NotFound);
        }
    }

    for row_action in &row_actions {
        repo.dispatch(row_action).map_err(|err| {
            log::error!("Failed to dispatch {row_action}: {err}");
            err
        })?;
    }

    Ok(row_actions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SampleRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[test]
    fn known_row_action_is_forwarded() {
        let mut repo = MockRepository::new();
        repo.expect_dispatch()
            .withf(|action| {
                action.entity == EntityKind::Users
                    && action.id == 4
                    && action.action == ActionKind::ToggleModerator
            })
            .times(1)
            .returning(|_| Ok(()));

        let action = dispatch_action(&repo, "users", 4, "toggle-moderator").unwrap();

        assert_eq!(action.to_string(), "toggle-moderator users #4");
    }

    #[test]
    fn unsupported_action_is_rejected_before_dispatch() {
        let mut repo = MockRepository::new();
        repo.expect_dispatch().never();

        let result = dispatch_action(&repo, "follows", 1, "delete");

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn unknown_row_maps_to_not_found() {
        let repo = SampleRepository::new().unwrap();

        let result = dispatch_action(&repo, "posts", 404, "delete");

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn bulk_action_dispatches_every_row() {
        let mut repo = MockRepository::new();
        repo.expect_row_exists().times(3).returning(|_, _| Ok(true));
        repo.expect_dispatch().times(3).returning(|_| Ok(()));

        let count =
            dispatch_bulk_action(&repo, EntityKind::Reports, b"action=resolve&ids=1&ids=3&ids=4")
                .unwrap();

        assert_eq!(count, 3);
    }

    #[test]
    fn bulk_action_validates_all_ids_first() {
        let mut repo = MockRepository::new();
        repo.expect_dispatch().never();

        let result = dispatch_bulk_action(&repo, EntityKind::Posts, b"action=delete&ids=2&ids=0");

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn bulk_action_without_rows_is_a_form_error() {
        let repo = MockRepository::new();

        let result = dispatch_bulk_action(&repo, EntityKind::Posts, b"action=delete");

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn dispatcher_failure_stops_the_batch() {
        let mut repo = MockRepository::new();
        repo.expect_row_exists().returning(|_, _| Ok(true));
        repo.expect_dispatch()
            .times(1)
            .returning(|_| Err(RepositoryError::Unexpected("queue full".to_string())));

        let result = dispatch_bulk_action(&repo, EntityKind::Users, b"action=block&ids=1&ids=2");

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn bulk_action_with_unknown_row_dispatches_nothing() {
        let mut repo = MockRepository::new();
        repo.expect_row_exists()
            .returning(|entity, id| Ok(entity == EntityKind::Posts && id != 999));
        repo.expect_dispatch().never();

        let result =
            dispatch_bulk_action(&repo, EntityKind::Posts, b"action=delete&ids=1&ids=2&ids=999");

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn sample_bulk_action_rejects_missing_post() {
        let repo = SampleRepository::new().unwrap();

        let result =
            dispatch_bulk_action(&repo, EntityKind::Posts, b"action=delete&ids=1&ids=2&ids=999");

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn bulk_action_lookup_failure_dispatches_nothing() {
        let mut repo = MockRepository::new();
        repo.expect_row_exists()
            .times(1)
            .returning(|_, _| Err(RepositoryError::Unexpected("lookup failed".to_string())));
        repo.expect_dispatch().never();

        let result = dispatch_bulk_action(&repo, EntityKind::Users, b"action=block&ids=1&ids=2");

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
