//! Email addresses
//!
//! Every address handed to the mail transport goes through this type first,
//! whether it came from the user directory or straight from the caller's
//! notification options.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // local-part @ domain with at least one dot; whitespace never allowed.
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// An error that can occur when creating an email address
#[derive(Debug, Error)]
pub enum EmailAddressError {
    /// The address is empty or all whitespace
    #[error("email address is empty")]
    Empty,

    /// The address does not look like `local@domain.tld`
    #[error("'{0}' is not a valid email address")]
    Malformed(String),
}

/// A validated email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap a raw address, trimming surrounding whitespace
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmailAddressError::Empty);
        }

        if !ADDRESS_REGEX.is_match(trimmed) {
            return Err(EmailAddressError::Malformed(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wrap an address without validating it
    ///
    /// For test fixtures and values already validated upstream.
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_new_trims_surrounding_whitespace() -> TestResult {
        let email = EmailAddress::new("  alice@x.com\n")?;

        assert_eq!(email.as_str(), "alice@x.com");

        Ok(())
    }

    #[test]
    fn test_display_renders_the_raw_address() -> TestResult {
        let email = EmailAddress::new("noreply@example.com")?;

        assert_eq!(format!("{}", email), "noreply@example.com");

        Ok(())
    }

    #[test]
    fn test_blank_address_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let result = EmailAddress::new(raw);
            assert!(matches!(result, Err(EmailAddressError::Empty)), "{raw:?}");
        }
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        for raw in [
            "alice",
            "alice@",
            "@x.com",
            "alice@examplecom",
            "alice a@x.com",
            "alice@@x.com",
        ] {
            let result = EmailAddress::new(raw);
            assert!(
                matches!(result, Err(EmailAddressError::Malformed(_))),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_new_unchecked_skips_validation() {
        assert_eq!(EmailAddress::new_unchecked("ghost").as_str(), "ghost");
    }
}
