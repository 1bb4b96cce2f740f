//! Shared utilities: logging setup and validation primitives.

pub mod logger;
pub mod validation;
