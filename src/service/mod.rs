//! The consistency engine: entity flows and the business rules that couple
//! Employee and Department state.

pub mod department;
pub mod employee;
