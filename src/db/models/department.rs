//! Department model

use serde::{Deserialize, Serialize};

use crate::core::AppError;

/// Department record. `id == 0` means not yet persisted.
///
/// Field-wise equality (`PartialEq`) is what the update flow uses to detect
/// no-op writes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub min_salary: f64,
    pub max_salary: f64,
}

/// Create/update payload for a department.
///
/// Absent fields stay `None`; on the update path they are filled from the
/// stored record before anything else looks at them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentDraft {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}

impl DepartmentDraft {
    /// Names of required fields absent from the payload.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.min_salary.is_none() {
            missing.push("min_salary");
        }
        if self.max_salary.is_none() {
            missing.push("max_salary");
        }
        missing
    }

    /// Copy the stored value into every absent field. Never touches the id.
    pub fn fill_from(&mut self, stored: &Department) {
        if self.name.is_none() {
            self.name = Some(stored.name.clone());
        }
        if self.min_salary.is_none() {
            self.min_salary = Some(stored.min_salary);
        }
        if self.max_salary.is_none() {
            self.max_salary = Some(stored.max_salary);
        }
    }

    /// Upper-case the name, the canonical stored form.
    pub fn normalize(&mut self) {
        if let Some(name) = &self.name {
            self.name = Some(name.to_uppercase());
        }
    }

    /// Convert into a record once every field is present.
    pub fn into_record(self) -> Result<Department, AppError> {
        match (self.name, self.min_salary, self.max_salary) {
            (Some(name), Some(min_salary), Some(max_salary)) => Ok(Department {
                id: self.id,
                name,
                min_salary,
                max_salary,
            }),
            _ => Err(AppError::internal(
                "department draft converted before reconciliation",
            )),
        }
    }
}

/// Aggregate row: average salary per department, rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AverageSalaryRow {
    pub department_name: String,
    pub average_salary: f64,
}
