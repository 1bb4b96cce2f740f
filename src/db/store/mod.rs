//! Store gateway
//!
//! The consistency engine talks to persistence through the [`Store`] trait
//! only. `save_*` assigns the next positive identity when the incoming
//! record's id is 0; every other operation addresses records by identity.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::db::models::{AverageSalaryRow, Department, Employee, EmployeeSummary};

/// Store failure, surfaced to callers as a generic 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_department(&self, id: i64) -> StoreResult<Option<Department>>;
    async fn find_department_by_name(&self, name: &str) -> StoreResult<Option<Department>>;
    async fn save_department(&self, department: Department) -> StoreResult<Department>;
    async fn delete_department(&self, id: i64) -> StoreResult<()>;
    async fn list_departments(&self) -> StoreResult<Vec<Department>>;

    /// Average salary per department, rounded to 2 decimal places,
    /// ordered by department name.
    async fn average_salary_by_department(&self) -> StoreResult<Vec<AverageSalaryRow>>;

    async fn find_employee(&self, id: i64) -> StoreResult<Option<Employee>>;
    async fn save_employee(&self, employee: Employee) -> StoreResult<Employee>;
    async fn delete_employee(&self, id: i64) -> StoreResult<()>;
    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    async fn employees_in_department(&self, id: i64) -> StoreResult<Vec<Employee>>;

    /// Employees joined with their department's name, ordered by it.
    async fn employees_with_department_names(&self) -> StoreResult<Vec<EmployeeSummary>>;

    /// Employees born in the inclusive `[from, to]` range, joined with
    /// their department's name and ordered by it.
    async fn employees_born_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> StoreResult<Vec<EmployeeSummary>>;
}
