//! User directory infrastructure

pub mod memory;
