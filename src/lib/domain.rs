//! Domain layer: capability contracts and the product accessor facade

pub mod directory;
pub mod email_addresses;
pub mod mailer;
pub mod metadata;
pub mod modules;
pub mod notifications;
pub mod product;
pub mod templates;
