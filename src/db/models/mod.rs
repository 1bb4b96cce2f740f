//! Data model: persisted records, payload drafts and query rows.

pub mod department;
pub mod employee;

pub use department::{AverageSalaryRow, Department, DepartmentDraft};
pub use employee::{DepartmentRef, Employee, EmployeeDraft, EmployeeSummary};
