//! Build metadata capability

use thiserror::Error;

#[cfg(test)]
use mockall::mock;

/// Errors that can occur when reading build metadata
///
/// A missing property is a build or deployment defect, so unlike notification
/// failures it is never swallowed.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The requested property is not present in the build metadata
    #[error("Build metadata property '{0}' is missing")]
    PropertyMissing(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Source of build-time metadata properties
pub trait MetadataSource: Clone + Send + Sync + 'static {
    /// Get the value of a named property
    fn get(&self, key: &str) -> Result<String, MetadataError>;
}

#[cfg(test)]
mock! {
    pub MetadataSource {}

    impl Clone for MetadataSource {
        fn clone(&self) -> Self;
    }

    impl MetadataSource for MetadataSource {
        fn get(&self, key: &str) -> Result<String, MetadataError>;
    }
}
