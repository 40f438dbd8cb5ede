//! Notification send errors

use thiserror::Error;

use crate::domain::{
    directory::DirectoryError, mailer::MailTransportError, templates::TemplateRenderError,
};

/// Anything that can go wrong between accepting [`EmailOptions`] and the
/// transport taking the message
///
/// The variants are matched exactly once, at the `send_email` boundary, where
/// they are logged and dropped. Notification delivery is best-effort and must
/// never interrupt the caller's primary workflow.
///
/// [`EmailOptions`]: crate::domain::notifications::EmailOptions
#[derive(Debug, Error)]
pub enum SendEmailError {
    /// The user directory failed while resolving the recipient
    #[error("Unable to look up user for sending mail")]
    Directory(#[from] DirectoryError),

    /// The subject or body template failed to render
    #[error("Unable to render notification template")]
    TemplateRender(#[from] TemplateRenderError),

    /// The mail transport rejected or failed to deliver the message
    #[error("Unable to send mail")]
    Transport(#[from] MailTransportError),
}
