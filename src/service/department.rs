//! Department flows
//!
//! Create, update (with cascading salary re-clamp), delete, and the
//! aggregate queries. Every flow runs against the abstract [`Store`].

use tracing::info;

use crate::core::AppError;
use crate::db::models::{AverageSalaryRow, Department, DepartmentDraft};
use crate::db::store::Store;
use crate::utils::validation;

/// Outcome of an update: the reconciled department plus what happened.
#[derive(Debug)]
pub struct DepartmentUpdate {
    pub department: Department,
    /// False when the reconciled payload equaled the stored record and the
    /// write was skipped.
    pub changed: bool,
    /// True when the cascading re-clamp adjusted at least one salary.
    pub salaries_adjusted: bool,
}

pub async fn list(store: &dyn Store) -> Result<Vec<Department>, AppError> {
    let departments = store.list_departments().await?;
    if departments.is_empty() {
        return Err(AppError::empty_result());
    }
    Ok(departments)
}

pub async fn get(store: &dyn Store, id: i64) -> Result<Department, AppError> {
    store
        .find_department(id)
        .await?
        .ok_or_else(|| AppError::not_found_by_id("department", id))
}

pub async fn average_salary(store: &dyn Store) -> Result<Vec<AverageSalaryRow>, AppError> {
    let rows = store.average_salary_by_department().await?;
    if rows.is_empty() {
        return Err(AppError::empty_result());
    }
    Ok(rows)
}

/// Format rules for the fields a payload supplies. Reconciled values coming
/// from the store were validated when they were written.
fn check_fields(draft: &DepartmentDraft) -> Result<(), AppError> {
    if let Some(name) = &draft.name {
        validation::check_department_name(name)?;
    }
    if let Some(min_salary) = draft.min_salary {
        validation::check_salary_bounds(min_salary, "min_salary")?;
    }
    if let Some(max_salary) = draft.max_salary {
        validation::check_salary_bounds(max_salary, "max_salary")?;
    }
    Ok(())
}

pub async fn create(store: &dyn Store, mut draft: DepartmentDraft) -> Result<Department, AppError> {
    if draft.id != 0 {
        return Err(AppError::EntityAlreadyIdentified("department".to_string()));
    }
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }
    check_fields(&draft)?;
    draft.normalize();
    let department = draft.into_record()?;

    if store.find_department_by_name(&department.name).await?.is_some() {
        return Err(AppError::DuplicateName("name".to_string()));
    }
    validation::check_department_range(department.min_salary, department.max_salary)?;

    let created = store.save_department(department).await?;
    info!(id = created.id, name = %created.name, "department created");
    Ok(created)
}

pub async fn update(
    store: &dyn Store,
    mut draft: DepartmentDraft,
) -> Result<DepartmentUpdate, AppError> {
    if draft.id <= 0 {
        return Err(AppError::InvalidIdentity("department".to_string()));
    }
    let stored = get(store, draft.id).await?;

    draft.fill_from(&stored);
    check_fields(&draft)?;
    draft.normalize();
    let department = draft.into_record()?;

    if department.name != stored.name
        && store.find_department_by_name(&department.name).await?.is_some()
    {
        return Err(AppError::DuplicateName("name".to_string()));
    }
    validation::check_department_range(department.min_salary, department.max_salary)?;

    if department == stored {
        return Ok(DepartmentUpdate {
            department,
            changed: false,
            salaries_adjusted: false,
        });
    }

    let range_edited = department.min_salary != stored.min_salary
        || department.max_salary != stored.max_salary;
    let salaries_adjusted = if range_edited {
        reclamp_salaries(store, &department).await?
    } else {
        false
    };

    let saved = store.save_department(department).await?;
    info!(
        id = saved.id,
        name = %saved.name,
        salaries_adjusted,
        "department updated"
    );
    Ok(DepartmentUpdate {
        department: saved,
        changed: true,
        salaries_adjusted,
    })
}

/// Cascading salary re-clamp: pull every employee of the edited department
/// back inside its new range. Employees already in range are not re-saved.
/// Returns whether at least one salary was adjusted.
pub async fn reclamp_salaries(
    store: &dyn Store,
    department: &Department,
) -> Result<bool, AppError> {
    let employees = store.employees_in_department(department.id).await?;
    let mut adjusted = false;

    for mut employee in employees {
        if employee.salary < department.min_salary {
            employee.salary = department.min_salary;
        } else if employee.salary > department.max_salary {
            employee.salary = department.max_salary;
        } else {
            continue;
        }
        info!(
            id = employee.id,
            salary = employee.salary,
            department = %department.name,
            "employee salary re-clamped"
        );
        store.save_employee(employee).await?;
        adjusted = true;
    }
    Ok(adjusted)
}

pub async fn delete(store: &dyn Store, id: i64) -> Result<(), AppError> {
    get(store, id).await?;
    // Employees of the department are detached by the store, not deleted
    store.delete_department(id).await?;
    info!(id, "department deleted");
    Ok(())
}
