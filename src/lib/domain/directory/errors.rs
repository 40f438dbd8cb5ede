//! User directory errors

use thiserror::Error;

/// Errors that can occur when querying the user directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory could not be reached
    #[error("The user directory is unavailable")]
    Unavailable,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
