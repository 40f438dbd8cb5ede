//! User directory capability
//!
//! The host product owns the user store; this seam only describes the lookup
//! contract the bridge relies on.

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::email_addresses::EmailAddress;

pub mod errors;

pub use errors::DirectoryError;

/// A user as the host product's directory reports it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryUser {
    /// The login name the user is keyed by
    pub username: String,

    /// The user's display name
    pub full_name: String,

    /// The user's email address
    pub email: EmailAddress,
}

/// User directory
///
/// `Ok(None)` means the user does not exist; [`DirectoryError`] means the
/// directory itself could not answer. Callers that only need a best-effort
/// answer collapse the two.
#[async_trait]
pub trait UserDirectory: Clone + Send + Sync + 'static {
    /// Look up a user by username
    async fn lookup(&self, username: &str) -> Result<Option<DirectoryUser>, DirectoryError>;
}

#[cfg(test)]
mock! {
    pub UserDirectory {}

    impl Clone for UserDirectory {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl UserDirectory for UserDirectory {
        async fn lookup(&self, username: &str) -> Result<Option<DirectoryUser>, DirectoryError>;
    }
}
