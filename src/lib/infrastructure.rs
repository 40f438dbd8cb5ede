//! Infrastructure layer: concrete adapters for the domain capabilities

pub mod directory;
pub mod email;
pub mod metadata;
pub mod templates;
