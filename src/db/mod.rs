//! Data layer: models and the store gateway.

pub mod models;
pub mod store;
