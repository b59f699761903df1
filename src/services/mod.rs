//! Application services orchestrating repositories, forms and the table
//! controller for the HTTP layer.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod actions;
pub mod insights;
pub mod listing;
pub mod main;
pub mod messages;
pub mod music;
pub mod posts;
pub mod reports;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("export failed: {0}")]
    Export(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
