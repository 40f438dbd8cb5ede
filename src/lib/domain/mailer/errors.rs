//! Mail transport errors

use lettre::address::AddressError;
use thiserror::Error;

/// Errors that can occur while handing a message to the mail transport
#[derive(Debug, Error)]
pub enum MailTransportError {
    /// An error occurred while sending the email
    #[error("An error occurred while sending the email")]
    SendError,

    /// Invalid email address
    #[error("Invalid email address")]
    InvalidEmail,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailTransportError {
    fn from(err: anyhow::Error) -> Self {
        MailTransportError::UnknownError(err)
    }
}

impl From<AddressError> for MailTransportError {
    fn from(_err: AddressError) -> Self {
        MailTransportError::InvalidEmail
    }
}

impl From<lettre::error::Error> for MailTransportError {
    fn from(err: lettre::error::Error) -> Self {
        MailTransportError::UnknownError(err.into())
    }
}
