//! HR record-keeping REST backend
//!
//! CRUD and query endpoints over two related entities, Employee and
//! Department, with field validation and the business rules that couple
//! them: salary-range containment, cascading salary re-clamp on department
//! edits, transfer re-leveling, and department name uniqueness.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/      # configuration, state, errors, server lifecycle
//! ├── db/        # models and the store gateway (+ in-memory store)
//! ├── service/   # the consistency engine: entity flows and rules
//! ├── routes/    # HTTP routing and handlers
//! └── utils/     # logging setup, validation primitives
//! ```

pub mod core;
pub mod db;
pub mod routes;
pub mod service;
pub mod utils;

// Re-export public types
pub use core::{AppError, AppResult, Config, Server, ServerState};
pub use db::models::{Department, DepartmentDraft, Employee, EmployeeDraft};
pub use db::store::{MemoryStore, Store, StoreError};
pub use utils::logger::init_logger;
