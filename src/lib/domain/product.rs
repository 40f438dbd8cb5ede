//! Product accessor facade
//!
//! The one surface the rest of the plugin talks to when it needs something
//! product-specific: version metadata, user display names, profile links and
//! templated notification email.

use async_trait::async_trait;

use crate::domain::{
    metadata::MetadataError,
    notifications::EmailOptions,
    templates::TemplateContext,
};

pub mod confluence;

pub use confluence::ConfluenceProductAccessor;

/// What became of a best-effort send attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was handed to the mail transport
    Sent,

    /// The addressed user could not be resolved, so the send was dropped
    RecipientUnresolved,

    /// Neither a username nor a fallback address was supplied, so the send
    /// was dropped
    MissingRecipientAddress,
}

/// Facade over a host product's user directory, mail pipeline and version
/// metadata
#[async_trait]
pub trait ProductAccessor: Clone + Send + Sync + 'static {
    /// Identifier of the product family this accessor targets
    fn sdk_name(&self) -> &str;

    /// The product version from build metadata
    ///
    /// A missing property is a deployment defect and propagates as
    /// [`MetadataError`].
    fn version(&self) -> Result<String, MetadataError>;

    /// The product data version from build metadata
    fn data_version(&self) -> Result<String, MetadataError>;

    /// Resolve a username to a display name
    ///
    /// Never fails: if the user cannot be resolved for any reason, the
    /// failure is logged and the raw username is returned unchanged.
    async fn user_full_name(&self, username: &str) -> String;

    /// Send a templated notification email, best-effort
    ///
    /// Every failure on the way to the transport is logged and swallowed;
    /// the caller's workflow is never interrupted by notification delivery.
    async fn send_email(&self, options: &EmailOptions);

    /// URL path fragment of the product's user-profile servlet
    fn profile_path(&self) -> &str;

    /// Extract the target username from a web-condition context
    ///
    /// Returns the name of a user-shaped value stored under the well-known
    /// key, or [`None`] for a missing key or any other value shape.
    fn target_username_from_condition(&self, context: &TemplateContext) -> Option<String>;
}
