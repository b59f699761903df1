//! Form definitions backing the admin POST routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod actions;
pub mod music;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed form payload: {0}")]
    Malformed(String),

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid artist")]
    InvalidArtist,

    #[error("invalid category")]
    InvalidCategory,

    #[error("invalid duration, expected m:ss")]
    InvalidDuration,

    #[error("no rows selected")]
    NoRowsSelected,
}
