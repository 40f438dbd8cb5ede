#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Product-integration bridge for the Speakeasy plugin: user resolution,
//! templated email notifications and module-descriptor registration over
//! host-owned subsystems.

pub mod domain;
pub mod infrastructure;
