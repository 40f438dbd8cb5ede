//! SMTP mail transport implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use tracing::error;
use lettre::{
    message::Mailbox,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Address, Message, SmtpTransport, Transport,
};

use crate::domain::mailer::{MailTransport, MailTransportError, OutboundMessage};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP-backed mail transport
#[derive(Debug, Default, Clone)]
pub struct SmtpMailTransport {
    config: SmtpConfig,
}

impl SmtpMailTransport {
    /// Create a new SMTP mail transport
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn mailer(&self) -> Result<SmtpTransport> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailTransportError> {
        let from: Address = message.from.as_str().parse()?;
        let to: Address = message.to.as_str().parse()?;

        let mut builder = Message::builder()
            .from(Mailbox::new(Some(message.from_name.clone()), from))
            .to(Mailbox::new(None, to))
            .subject(message.subject.clone());

        if let Some(reply_to) = &message.reply_to {
            builder = builder.reply_to(Mailbox::new(None, reply_to.as_str().parse()?));
        }

        let email = builder.body(message.body.clone())?;

        match self.mailer()?.send(&email) {
            Ok(_) => Ok(()),
            Err(e) => {
                error!(error = %e, "SMTP delivery failed");
                Err(MailTransportError::SendError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::email_addresses::EmailAddress;

    use super::*;

    fn message() -> OutboundMessage {
        OutboundMessage {
            to: EmailAddress::new_unchecked("alice@x.com"),
            from_name: "Speakeasy".to_string(),
            from: EmailAddress::new_unchecked("noreply@example.com"),
            subject: "subject".to_string(),
            body: "body".to_string(),
            reply_to: None,
        }
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_a_send_error() {
        // Port 1 on loopback: the connection is refused before any SMTP
        // exchange takes place.
        let transport = SmtpMailTransport::new(SmtpConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            username: "user".to_string(),
            password: "password".to_string(),
            verify_tls: false,
            starttls: false,
        });

        let result = transport.send(&message()).await;

        assert!(matches!(result, Err(MailTransportError::SendError)));
    }

    #[tokio::test]
    async fn test_malformed_recipient_is_an_invalid_email() {
        let transport = SmtpMailTransport::new(SmtpConfig::default());

        let mut message = message();
        message.to = EmailAddress::new_unchecked("not an address");

        let result = transport.send(&message).await;

        assert!(matches!(result, Err(MailTransportError::InvalidEmail)));
    }
}
