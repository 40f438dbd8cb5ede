//! Build properties metadata source
//!
//! The plugin's build emits a flat `key=value` properties file; this is the
//! runtime view over it.

use std::{collections::HashMap, fs, path::Path, sync::Arc};

use crate::domain::metadata::{MetadataError, MetadataSource};

/// Metadata source over `key=value` build properties
#[derive(Clone, Debug, Default)]
pub struct BuildProperties {
    properties: Arc<HashMap<String, String>>,
}

impl BuildProperties {
    /// Parse properties from `key=value` lines
    ///
    /// Blank lines and `#` comments are skipped; lines without a `=` are
    /// ignored.
    pub fn parse(input: &str) -> Self {
        let mut properties = HashMap::new();

        for line in input.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                properties.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self {
            properties: Arc::new(properties),
        }
    }

    /// Load properties from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let contents =
            fs::read_to_string(path).map_err(|e| MetadataError::UnknownError(e.into()))?;

        Ok(Self::parse(&contents))
    }
}

impl MetadataSource for BuildProperties {
    fn get(&self, key: &str) -> Result<String, MetadataError> {
        self.properties
            .get(key)
            .cloned()
            .ok_or_else(|| MetadataError::PropertyMissing(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() -> TestResult {
        let properties = BuildProperties::parse(
            "# build metadata\n\nconfluence.version = 7.13.2\nconfluence.data.version=7013002\nmalformed line\n",
        );

        assert_eq!(properties.get("confluence.version")?, "7.13.2");
        assert_eq!(properties.get("confluence.data.version")?, "7013002");

        Ok(())
    }

    #[test]
    fn test_missing_property_is_an_error() {
        let properties = BuildProperties::parse("");

        let result = properties.get("confluence.version");

        assert!(
            matches!(result, Err(MetadataError::PropertyMissing(key)) if key == "confluence.version")
        );
    }
}
