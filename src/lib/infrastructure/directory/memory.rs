//! In-memory user directory
//!
//! A fixed user table standing in for the host product's user manager, for
//! local runs and wiring tests.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    directory::{DirectoryError, DirectoryUser, UserDirectory},
    email_addresses::EmailAddress,
};

/// A seed record for the in-memory directory
#[derive(Clone, Debug, Deserialize)]
pub struct DirectoryEntry {
    /// Login name
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Email address
    pub email: String,
}

/// Directory over a fixed in-memory user table
#[derive(Clone, Debug, Default)]
pub struct InMemoryDirectory {
    users: Arc<HashMap<String, DirectoryUser>>,
}

impl InMemoryDirectory {
    /// Create a directory from a set of users
    pub fn new(users: impl IntoIterator<Item = DirectoryUser>) -> Self {
        Self {
            users: Arc::new(
                users
                    .into_iter()
                    .map(|user| (user.username.clone(), user))
                    .collect(),
            ),
        }
    }

    /// Create a directory from a JSON array of seed records
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let entries: Vec<DirectoryEntry> =
            serde_json::from_str(json).map_err(|e| DirectoryError::UnknownError(e.into()))?;

        let users = entries
            .into_iter()
            .map(|entry| {
                Ok(DirectoryUser {
                    email: EmailAddress::new(&entry.email)
                        .map_err(|e| DirectoryError::UnknownError(e.into()))?,
                    username: entry.username,
                    full_name: entry.full_name,
                })
            })
            .collect::<Result<Vec<_>, DirectoryError>>()?;

        Ok(Self::new(users))
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn lookup(&self, username: &str) -> Result<Option<DirectoryUser>, DirectoryError> {
        Ok(self.users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_lookup_known_and_unknown_users() -> TestResult {
        let directory = InMemoryDirectory::new([DirectoryUser {
            username: "alice".to_string(),
            full_name: "Alice A.".to_string(),
            email: EmailAddress::new("alice@x.com")?,
        }]);

        let found = directory.lookup("alice").await?;
        assert_eq!(found.map(|user| user.full_name), Some("Alice A.".to_string()));

        assert!(directory.lookup("ghost").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_from_json_seeds_users() -> TestResult {
        let directory = InMemoryDirectory::from_json(
            r#"[{"username": "bob", "full_name": "Bob B.", "email": "bob@example.com"}]"#,
        )?;

        let found = directory.lookup("bob").await?;
        assert_eq!(
            found.map(|user| user.email),
            Some(EmailAddress::new("bob@example.com")?)
        );

        Ok(())
    }

    #[test]
    fn test_from_json_rejects_invalid_addresses() {
        let result = InMemoryDirectory::from_json(
            r#"[{"username": "bob", "full_name": "Bob B.", "email": "not-an-address"}]"#,
        );

        assert!(result.is_err());
    }
}
