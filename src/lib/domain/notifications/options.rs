//! Email notification options

use crate::domain::{email_addresses::EmailAddress, templates::TemplateContext};

/// Everything a caller supplies to have a notification email sent
///
/// When `to_username` is set, the recipient's name and address come from the
/// user directory and override the `to_name`/`to_email` pair; the pair is only
/// used directly when no username is given.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailOptions {
    from_name: String,
    from_email: EmailAddress,
    subject_template: String,
    body_template: String,
    to_username: Option<String>,
    to_name: Option<String>,
    to_email: Option<EmailAddress>,
    reply_to_email: Option<EmailAddress>,
    context: TemplateContext,
}

impl EmailOptions {
    /// Create options with the required sender and template fields
    pub fn new(
        from_name: impl Into<String>,
        from_email: EmailAddress,
        subject_template: impl Into<String>,
        body_template: impl Into<String>,
    ) -> Self {
        Self {
            from_name: from_name.into(),
            from_email,
            subject_template: subject_template.into(),
            body_template: body_template.into(),
            to_username: None,
            to_name: None,
            to_email: None,
            reply_to_email: None,
            context: TemplateContext::new(),
        }
    }

    /// Address the notification to a user in the host product's directory
    pub fn to_username(mut self, username: impl Into<String>) -> Self {
        self.to_username = Some(username.into());
        self
    }

    /// Address the notification to a raw name and address
    pub fn to_recipient(mut self, name: impl Into<String>, email: EmailAddress) -> Self {
        self.to_name = Some(name.into());
        self.to_email = Some(email);
        self
    }

    /// Set the reply-to address
    pub fn reply_to(mut self, email: EmailAddress) -> Self {
        self.reply_to_email = Some(email);
        self
    }

    /// Set the template substitution context
    pub fn context(mut self, context: TemplateContext) -> Self {
        self.context = context;
        self
    }

    /// The sender's display name
    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    /// The sender's address
    pub fn from_email(&self) -> &EmailAddress {
        &self.from_email
    }

    /// The subject template id
    pub fn subject_template(&self) -> &str {
        &self.subject_template
    }

    /// The body template id
    pub fn body_template(&self) -> &str {
        &self.body_template
    }

    /// The directory username to resolve the recipient from, if any
    pub fn to_username_value(&self) -> Option<&str> {
        self.to_username.as_deref()
    }

    /// The fallback recipient name, if any
    pub fn to_name_value(&self) -> Option<&str> {
        self.to_name.as_deref()
    }

    /// The fallback recipient address, if any
    pub fn to_email_value(&self) -> Option<&EmailAddress> {
        self.to_email.as_ref()
    }

    /// The reply-to address, if any
    pub fn reply_to_email_value(&self) -> Option<&EmailAddress> {
        self.reply_to_email.as_ref()
    }

    /// The caller's template context
    pub fn context_value(&self) -> &TemplateContext {
        &self.context
    }
}
