//! In-memory reference store
//!
//! Employees are held with a department foreign key and materialized with
//! the live department on every read, so a department edit is visible
//! through every employee that references it. A null or dangling key reads
//! back as "no department". Each call takes the lock once; multi-call flows
//! are not transactional (documented last-write-wins behavior).

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{Store, StoreResult};
use crate::db::models::{AverageSalaryRow, Department, Employee, EmployeeSummary};

/// Employee row as stored: scalar fields plus the department foreign key.
#[derive(Debug, Clone)]
struct EmployeeRow {
    id: i64,
    name: String,
    surname: String,
    birthday: NaiveDate,
    salary: f64,
    department_id: Option<i64>,
}

#[derive(Default)]
struct Inner {
    departments: BTreeMap<i64, Department>,
    employees: BTreeMap<i64, EmployeeRow>,
    last_department_id: i64,
    last_employee_id: i64,
}

impl Inner {
    fn materialize(&self, row: &EmployeeRow) -> Employee {
        Employee {
            id: row.id,
            name: row.name.clone(),
            surname: row.surname.clone(),
            birthday: row.birthday,
            salary: row.salary,
            department: row
                .department_id
                .and_then(|id| self.departments.get(&id))
                .cloned(),
        }
    }

    /// Summary rows for every employee with a resolvable department,
    /// ordered by department name (id as tiebreaker).
    fn summaries<F>(&self, mut keep: F) -> Vec<EmployeeSummary>
    where
        F: FnMut(&EmployeeRow) -> bool,
    {
        let mut rows: Vec<EmployeeSummary> = self
            .employees
            .values()
            .filter(|row| keep(row))
            .filter_map(|row| {
                let department = row.department_id.and_then(|id| self.departments.get(&id))?;
                Some(EmployeeSummary {
                    id: row.id,
                    name: row.name.clone(),
                    surname: row.surname.clone(),
                    salary: row.salary,
                    department_name: department.name.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            a.department_name
                .cmp(&b.department_name)
                .then(a.id.cmp(&b.id))
        });
        rows
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Round an average to exactly 2 decimal places, half away from zero.
fn round_average(sum: Decimal, count: u32) -> f64 {
    let average = sum / Decimal::from(count);
    average
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_department(&self, id: i64) -> StoreResult<Option<Department>> {
        Ok(self.inner.read().departments.get(&id).cloned())
    }

    async fn find_department_by_name(&self, name: &str) -> StoreResult<Option<Department>> {
        Ok(self
            .inner
            .read()
            .departments
            .values()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn save_department(&self, mut department: Department) -> StoreResult<Department> {
        let mut inner = self.inner.write();
        if department.id == 0 {
            inner.last_department_id += 1;
            department.id = inner.last_department_id;
        }
        inner.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn delete_department(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write();
        inner.departments.remove(&id);
        // Detach employees: they survive the department, unassigned
        for row in inner.employees.values_mut() {
            if row.department_id == Some(id) {
                row.department_id = None;
            }
        }
        Ok(())
    }

    async fn list_departments(&self) -> StoreResult<Vec<Department>> {
        Ok(self.inner.read().departments.values().cloned().collect())
    }

    async fn average_salary_by_department(&self) -> StoreResult<Vec<AverageSalaryRow>> {
        let inner = self.inner.read();
        let mut groups: BTreeMap<String, (Decimal, u32)> = BTreeMap::new();
        for row in inner.employees.values() {
            let Some(department) = row.department_id.and_then(|id| inner.departments.get(&id))
            else {
                continue;
            };
            let salary = Decimal::from_f64(row.salary).unwrap_or(Decimal::ZERO);
            let entry = groups.entry(department.name.clone()).or_insert((Decimal::ZERO, 0));
            entry.0 += salary;
            entry.1 += 1;
        }
        Ok(groups
            .into_iter()
            .map(|(department_name, (sum, count))| AverageSalaryRow {
                department_name,
                average_salary: round_average(sum, count),
            })
            .collect())
    }

    async fn find_employee(&self, id: i64) -> StoreResult<Option<Employee>> {
        let inner = self.inner.read();
        Ok(inner.employees.get(&id).map(|row| inner.materialize(row)))
    }

    async fn save_employee(&self, employee: Employee) -> StoreResult<Employee> {
        let mut inner = self.inner.write();
        let mut row = EmployeeRow {
            id: employee.id,
            name: employee.name,
            surname: employee.surname,
            birthday: employee.birthday,
            salary: employee.salary,
            department_id: employee.department.as_ref().map(|d| d.id),
        };
        if row.id == 0 {
            inner.last_employee_id += 1;
            row.id = inner.last_employee_id;
        }
        inner.employees.insert(row.id, row.clone());
        Ok(inner.materialize(&row))
    }

    async fn delete_employee(&self, id: i64) -> StoreResult<()> {
        self.inner.write().employees.remove(&id);
        Ok(())
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let inner = self.inner.read();
        Ok(inner
            .employees
            .values()
            .map(|row| inner.materialize(row))
            .collect())
    }

    async fn employees_in_department(&self, id: i64) -> StoreResult<Vec<Employee>> {
        let inner = self.inner.read();
        Ok(inner
            .employees
            .values()
            .filter(|row| row.department_id == Some(id))
            .map(|row| inner.materialize(row))
            .collect())
    }

    async fn employees_with_department_names(&self) -> StoreResult<Vec<EmployeeSummary>> {
        Ok(self.inner.read().summaries(|_| true))
    }

    async fn employees_born_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> StoreResult<Vec<EmployeeSummary>> {
        Ok(self
            .inner
            .read()
            .summaries(|row| row.birthday >= from && row.birthday <= to))
    }
}
