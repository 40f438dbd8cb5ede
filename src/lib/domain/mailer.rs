//! Mail transport capability

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub mod errors;
pub mod message;

pub use errors::MailTransportError;
pub use message::OutboundMessage;

/// Mail transport
///
/// Delivery, queueing and timeouts are the transport's business; the bridge
/// hands a fully rendered message over and nothing more.
#[async_trait]
pub trait MailTransport: Clone + Send + Sync + 'static {
    /// Deliver an outbound message
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailTransportError>;
}

#[cfg(test)]
mock! {
    pub MailTransport {}

    impl Clone for MailTransport {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MailTransport for MailTransport {
        async fn send(&self, message: &OutboundMessage) -> Result<(), MailTransportError>;
    }
}
