//! Outbound email message

use crate::domain::email_addresses::EmailAddress;

/// A fully rendered notification email, ready for the transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The sender's display name
    pub from_name: String,

    /// The sender's address
    pub from: EmailAddress,

    /// The rendered subject line
    pub subject: String,

    /// The rendered body
    pub body: String,

    /// Optional reply-to address
    pub reply_to: Option<EmailAddress>,
}
