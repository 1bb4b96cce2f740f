//! Employee model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Department;
use crate::core::AppError;

/// Employee record. `id == 0` means not yet persisted.
///
/// The department is a value copy resolved from the store on read; `None`
/// means unassigned. Field-wise equality drives no-op write detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub salary: f64,
    pub department: Option<Department>,
}

/// Department reference inside an employee payload.
///
/// Callers may only set `id`; the other fields exist so that an
/// over-specified reference can be rejected instead of silently trusted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentRef {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}

impl DepartmentRef {
    pub fn is_id_only(&self) -> bool {
        self.name.is_none() && self.min_salary.is_none() && self.max_salary.is_none()
    }
}

/// Create/update payload for an employee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub department: Option<DepartmentRef>,
}

impl EmployeeDraft {
    /// Names of required fields absent from the payload (create path).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.surname.is_none() {
            missing.push("surname");
        }
        if self.birthday.is_none() {
            missing.push("birthday");
        }
        if self.salary.is_none() {
            missing.push("salary");
        }
        if self.department.is_none() {
            missing.push("department");
        }
        missing
    }

    /// Copy the stored value into every absent scalar field. The department
    /// is reconciled by the caller, which resolves references against the
    /// store; the id is never touched.
    pub fn fill_from(&mut self, stored: &Employee) {
        if self.name.is_none() {
            self.name = Some(stored.name.clone());
        }
        if self.surname.is_none() {
            self.surname = Some(stored.surname.clone());
        }
        if self.birthday.is_none() {
            self.birthday = Some(stored.birthday);
        }
        if self.salary.is_none() {
            self.salary = Some(stored.salary);
        }
    }

    /// Take the scalar fields out once every one of them is present.
    pub fn into_scalars(self) -> Result<(String, String, NaiveDate, f64), AppError> {
        match (self.name, self.surname, self.birthday, self.salary) {
            (Some(name), Some(surname), Some(birthday), Some(salary)) => {
                Ok((name, surname, birthday, salary))
            }
            _ => Err(AppError::internal(
                "employee draft converted before reconciliation",
            )),
        }
    }
}

/// Query row: employee joined with its department's name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmployeeSummary {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub salary: f64,
    pub department_name: String,
}
