//! Confluence product accessor

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::{
    directory::UserDirectory,
    email_addresses::EmailAddress,
    mailer::{MailTransport, OutboundMessage},
    metadata::{MetadataError, MetadataSource},
    notifications::{EmailOptions, SendEmailError},
    product::{ProductAccessor, SendOutcome},
    templates::{TemplateContext, TemplateRenderer},
};

/// Product family identifier reported to the rest of the plugin
const SDK_NAME: &str = "confluence";

/// Build metadata property holding the product version
const VERSION_PROPERTY: &str = "confluence.version";

/// Build metadata property holding the product data version
const DATA_VERSION_PROPERTY: &str = "confluence.data.version";

/// Path of the plugin's user-profile servlet within the product
const PROFILE_PATH: &str = "/plugins/servlet/speakeasy/user";

/// Well-known condition-context key holding the target user
const TARGET_USER_KEY: &str = "targetUser";

/// Context key injected with the resolved recipient's display name
const TO_FULL_NAME_KEY: &str = "toFullName";

/// The recipient a send attempt settled on
struct ResolvedRecipient {
    name: String,
    email: EmailAddress,
}

/// [`ProductAccessor`] implementation backed by Confluence's user directory,
/// mail pipeline and build metadata
#[derive(Debug, Clone)]
pub struct ConfluenceProductAccessor<D, R, T, M>
where
    D: UserDirectory,
    R: TemplateRenderer,
    T: MailTransport,
    M: MetadataSource,
{
    directory: Arc<D>,
    renderer: Arc<R>,
    transport: Arc<T>,
    metadata: Arc<M>,
}

impl<D, R, T, M> ConfluenceProductAccessor<D, R, T, M>
where
    D: UserDirectory,
    R: TemplateRenderer,
    T: MailTransport,
    M: MetadataSource,
{
    /// Create a new accessor over the given host subsystems
    pub fn new(directory: Arc<D>, renderer: Arc<R>, transport: Arc<T>, metadata: Arc<M>) -> Self {
        Self {
            directory,
            renderer,
            transport,
            metadata,
        }
    }

    /// The fallible send pipeline behind [`ProductAccessor::send_email`]
    ///
    /// The skipped-send cases are successful outcomes, not errors: an
    /// unresolvable recipient drops the notification by design. Everything
    /// else surfaces as a [`SendEmailError`] for the boundary to log.
    pub async fn try_send_email(
        &self,
        options: &EmailOptions,
    ) -> Result<SendOutcome, SendEmailError> {
        let recipient = match options.to_username_value() {
            Some(username) => match self.directory.lookup(username).await? {
                Some(user) => ResolvedRecipient {
                    name: user.full_name,
                    email: user.email,
                },
                None => {
                    warn!(username, "Cannot find profile for user, dropping notification");
                    return Ok(SendOutcome::RecipientUnresolved);
                }
            },
            None => match options.to_email_value() {
                Some(email) => ResolvedRecipient {
                    name: options.to_name_value().unwrap_or_default().to_string(),
                    email: email.clone(),
                },
                None => {
                    warn!("No recipient username or address supplied, dropping notification");
                    return Ok(SendOutcome::MissingRecipientAddress);
                }
            },
        };

        // The caller's mapping is copied, never touched in place.
        let mut context = options.context_value().clone();
        context.insert(
            TO_FULL_NAME_KEY.to_string(),
            Value::String(recipient.name.clone()),
        );

        let subject = self
            .renderer
            .render(options.subject_template(), &context)
            .await?;
        let body = self
            .renderer
            .render(options.body_template(), &context)
            .await?;

        let message = OutboundMessage {
            to: recipient.email,
            from_name: options.from_name().to_string(),
            from: options.from_email().clone(),
            subject,
            body,
            reply_to: options.reply_to_email_value().cloned(),
        };

        self.transport.send(&message).await?;

        Ok(SendOutcome::Sent)
    }
}

#[async_trait]
impl<D, R, T, M> ProductAccessor for ConfluenceProductAccessor<D, R, T, M>
where
    D: UserDirectory,
    R: TemplateRenderer,
    T: MailTransport,
    M: MetadataSource,
{
    fn sdk_name(&self) -> &str {
        SDK_NAME
    }

    fn version(&self) -> Result<String, MetadataError> {
        self.metadata.get(VERSION_PROPERTY)
    }

    fn data_version(&self) -> Result<String, MetadataError> {
        self.metadata.get(DATA_VERSION_PROPERTY)
    }

    async fn user_full_name(&self, username: &str) -> String {
        match self.directory.lookup(username).await {
            Ok(Some(user)) => user.full_name,
            Ok(None) => {
                warn!(username, "User not found, falling back to username");
                username.to_string()
            }
            Err(err) => {
                error!(username, error = %err, "Unable to lookup user");
                username.to_string()
            }
        }
    }

    async fn send_email(&self, options: &EmailOptions) {
        // The single log-and-drop boundary: notification failures never
        // reach the caller.
        if let Err(err) = self.try_send_email(options).await {
            match &err {
                SendEmailError::Directory(cause) => {
                    error!(error = %cause, "Unable to look up user for sending mail");
                }
                SendEmailError::TemplateRender(cause) => {
                    error!(error = %cause, "Unable to render mail template");
                }
                SendEmailError::Transport(cause) => {
                    error!(error = %cause, "Unable to send mail");
                }
            }
        }
    }

    fn profile_path(&self) -> &str {
        PROFILE_PATH
    }

    fn target_username_from_condition(&self, context: &TemplateContext) -> Option<String> {
        match context.get(TARGET_USER_KEY) {
            Some(Value::Object(user)) => user
                .get("name")
                .and_then(Value::as_str)
                .map(String::from),
            _ => None,
        }
    }
}
