//! Template rendering infrastructure

pub mod tera;
