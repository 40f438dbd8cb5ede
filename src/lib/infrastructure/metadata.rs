//! Build metadata infrastructure

pub mod properties;
