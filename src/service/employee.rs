//! Employee flows
//!
//! Create, update (with department transfer re-leveling), delete, and the
//! summary queries. Department references in payloads carry an id only and
//! are replaced with the authoritative stored record before any salary rule
//! runs.

use chrono::NaiveDate;
use tracing::info;

use crate::core::AppError;
use crate::db::models::{Department, DepartmentRef, Employee, EmployeeDraft, EmployeeSummary};
use crate::db::store::Store;
use crate::utils::validation::{self, capitalize};

pub async fn list(store: &dyn Store) -> Result<Vec<Employee>, AppError> {
    let employees = store.list_employees().await?;
    if employees.is_empty() {
        return Err(AppError::empty_result());
    }
    Ok(employees)
}

pub async fn get(store: &dyn Store, id: i64) -> Result<Employee, AppError> {
    store
        .find_employee(id)
        .await?
        .ok_or_else(|| AppError::not_found_by_id("employee", id))
}

pub async fn by_department(store: &dyn Store) -> Result<Vec<EmployeeSummary>, AppError> {
    let rows = store.employees_with_department_names().await?;
    if rows.is_empty() {
        return Err(AppError::empty_result());
    }
    Ok(rows)
}

/// Inclusive birthday range search. Reversed bounds are reordered.
pub async fn born_between(
    store: &dyn Store,
    first: NaiveDate,
    second: NaiveDate,
) -> Result<Vec<EmployeeSummary>, AppError> {
    let (from, to) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    let rows = store.employees_born_between(from, to).await?;
    if rows.is_empty() {
        return Err(AppError::empty_result());
    }
    Ok(rows)
}

/// Resolve a payload department reference into the authoritative record.
/// The reference must exist and must carry nothing besides the id.
async fn resolve_department_ref(
    store: &dyn Store,
    dept: &DepartmentRef,
) -> Result<Department, AppError> {
    let found = store
        .find_department(dept.id)
        .await?
        .ok_or_else(|| AppError::not_found_by_id("department", dept.id))?;
    if !dept.is_id_only() {
        return Err(AppError::invalid_field(
            "Write only the id field for the department",
        ));
    }
    Ok(found)
}

/// Format rules for the scalar fields a payload supplies.
fn check_fields(draft: &EmployeeDraft) -> Result<(), AppError> {
    if let Some(name) = &draft.name {
        validation::check_person_name(name, "name")?;
    }
    if let Some(surname) = &draft.surname {
        validation::check_person_name(surname, "surname")?;
    }
    if let Some(birthday) = draft.birthday {
        validation::check_past_date(birthday, "birthday")?;
    }
    if let Some(salary) = draft.salary {
        validation::check_salary_bounds(salary, "salary")?;
    }
    Ok(())
}

pub async fn create(store: &dyn Store, mut draft: EmployeeDraft) -> Result<Employee, AppError> {
    if draft.id != 0 {
        return Err(AppError::EntityAlreadyIdentified("employee".to_string()));
    }
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }
    let Some(dept_ref) = draft.department.take() else {
        return Err(AppError::missing_fields(&["department"]));
    };
    if dept_ref.id == 0 {
        return Err(AppError::MissingField(
            "You must write the department (only the id field) for a new employee".to_string(),
        ));
    }
    let department = resolve_department_ref(store, &dept_ref).await?;

    check_fields(&draft)?;
    let (name, surname, birthday, salary) = draft.into_scalars()?;
    validation::check_birthday(birthday)?;
    validation::check_salary_within_range(salary, &department)?;

    let employee = Employee {
        id: 0,
        name: capitalize(&name),
        surname: capitalize(&surname),
        birthday,
        salary,
        department: Some(department),
    };
    let created = store.save_employee(employee).await?;
    info!(id = created.id, name = %created.name, "employee created");
    Ok(created)
}

pub async fn update(store: &dyn Store, mut draft: EmployeeDraft) -> Result<Employee, AppError> {
    if draft.id <= 0 {
        return Err(AppError::InvalidIdentity("employee".to_string()));
    }
    let stored = get(store, draft.id).await?;
    if draft.birthday.is_some() {
        return Err(AppError::ImmutableField);
    }

    check_fields(&draft)?;
    let supplied_dept = draft.department.take();
    draft.fill_from(&stored);

    let department = match supplied_dept {
        Some(dept_ref) => Some(resolve_department_ref(store, &dept_ref).await?),
        None => stored.department.clone(),
    };

    let id = draft.id;
    let (name, surname, birthday, mut salary) = draft.into_scalars()?;

    match &department {
        Some(new_dept) => {
            if let Some(old_dept) = &stored.department
                && new_dept.id != old_dept.id
            {
                // Transfer re-leveling: non-overlapping ranges pull the
                // salary to the nearest bound of the new department
                if new_dept.min_salary > old_dept.max_salary && salary < new_dept.min_salary {
                    salary = new_dept.min_salary;
                } else if new_dept.max_salary < old_dept.min_salary
                    && salary > new_dept.max_salary
                {
                    salary = new_dept.max_salary;
                }
            }
            validation::check_salary_within_range(salary, new_dept)?;
        }
        None => {
            // Salary semantics are tied to having a department
            if salary != stored.salary {
                return Err(AppError::IllegalStateTransition);
            }
        }
    }

    let employee = Employee {
        id,
        name: capitalize(&name),
        surname: capitalize(&surname),
        birthday,
        salary,
        department,
    };
    if employee == stored {
        return Ok(employee);
    }
    let saved = store.save_employee(employee).await?;
    info!(id = saved.id, name = %saved.name, "employee updated");
    Ok(saved)
}

pub async fn delete(store: &dyn Store, id: i64) -> Result<(), AppError> {
    get(store, id).await?;
    store.delete_employee(id).await?;
    info!(id, "employee deleted");
    Ok(())
}
