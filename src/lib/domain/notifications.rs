//! Notification email options and failure taxonomy

pub mod errors;
pub mod options;

pub use errors::SendEmailError;
pub use options::EmailOptions;
