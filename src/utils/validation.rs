//! Field rules and validation primitives
//!
//! Centralized constants plus the stateless checks shared by the create and
//! update flows. Cross-entity checks (salary against a department's range)
//! live here too; the flows themselves are in `service`.

use chrono::{Days, Local, Months, NaiveDate};

use crate::core::AppError;
use crate::db::models::Department;

// ── Field rule constants ────────────────────────────────────────────

/// Name fields (employee name/surname, department name)
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 25;

/// Salaries and department range bounds, upper bound exclusive
pub const SALARY_MIN: f64 = 500.0;
pub const SALARY_MAX: f64 = 1_000_000.0;

/// Allowed spread between a department's min and max salary, inclusive
pub const SPREAD_MIN: f64 = 500.0;
pub const SPREAD_MAX: f64 = 7_000.0;

/// Employee age window at creation, both bounds strict
pub const MIN_AGE_YEARS: u32 = 18;
pub const MAX_AGE_YEARS: u32 = 60;

// ── Scalar field checks ─────────────────────────────────────────────

/// Validate an employee name/surname: 2-25 ASCII letters.
pub fn check_person_name(value: &str, field: &str) -> Result<(), AppError> {
    if value.len() < NAME_MIN_LEN || value.len() > NAME_MAX_LEN {
        return Err(AppError::invalid_field(format!(
            "The {field} field must have min {NAME_MIN_LEN} and max {NAME_MAX_LEN} symbols"
        )));
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::invalid_field(format!(
            "The {field} field must contain only A-Z or a-z symbols"
        )));
    }
    Ok(())
}

/// Validate a department name: 2-25 ASCII letters or underscores.
pub fn check_department_name(value: &str) -> Result<(), AppError> {
    if value.len() < NAME_MIN_LEN || value.len() > NAME_MAX_LEN {
        return Err(AppError::invalid_field(format!(
            "The name field must have min {NAME_MIN_LEN} and max {NAME_MAX_LEN} symbols"
        )));
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        return Err(AppError::invalid_field(
            "The name field must contain only A-Z, a-z or underscore symbols",
        ));
    }
    Ok(())
}

/// Validate a salary-like value against the global bounds.
pub fn check_salary_bounds(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < SALARY_MIN || value >= SALARY_MAX {
        return Err(AppError::invalid_field(format!(
            "The {field} field must be between {SALARY_MIN} and 999999.99"
        )));
    }
    Ok(())
}

/// Validate that a date lies in the past.
pub fn check_past_date(value: NaiveDate, field: &str) -> Result<(), AppError> {
    if value >= Local::now().date_naive() {
        return Err(AppError::invalid_field(format!(
            "The {field} field must contain a past date"
        )));
    }
    Ok(())
}

// ── Cross-entity checks ─────────────────────────────────────────────

/// Check the employee age window: strictly over 18 and under 60 years old.
///
/// The lower date bound (60 years ago) is exclusive; the upper bound is
/// "18 years ago plus one day", also exclusive, so a birthday exactly 18
/// years ago is still accepted.
pub fn check_birthday(birthday: NaiveDate) -> Result<(), AppError> {
    let today = Local::now().date_naive();
    let low_bound = today - Months::new(12 * MAX_AGE_YEARS);
    let up_bound = today - Months::new(12 * MIN_AGE_YEARS) + Days::new(1);

    if birthday > low_bound && birthday < up_bound {
        Ok(())
    } else {
        Err(AppError::invalid_field(format!(
            "The employee must be over {MIN_AGE_YEARS} years old and under {MAX_AGE_YEARS} years old"
        )))
    }
}

/// Check that a salary falls inside the department's range.
pub fn check_salary_within_range(salary: f64, department: &Department) -> Result<(), AppError> {
    if salary < department.min_salary {
        return Err(AppError::invalid_field(
            "The salary must be >= the min_salary of the employee's department",
        ));
    }
    if salary > department.max_salary {
        return Err(AppError::invalid_field(
            "The salary must be <= the max_salary of the employee's department",
        ));
    }
    Ok(())
}

/// Check a department's salary range: min below max and a spread of
/// 500 to 7000 inclusive.
pub fn check_department_range(min_salary: f64, max_salary: f64) -> Result<(), AppError> {
    let spread = max_salary - min_salary;
    if min_salary >= max_salary || !(SPREAD_MIN..=SPREAD_MAX).contains(&spread) {
        return Err(AppError::invalid_field(format!(
            "The min_salary field must be less than the max_salary field, \
             and the range between them must be between {SPREAD_MIN} and {SPREAD_MAX}"
        )));
    }
    Ok(())
}

// ── Text normalization ──────────────────────────────────────────────

/// First character upper-cased, remainder lower-cased.
///
/// Empty input returns the empty string; name fields enforce a minimum
/// length of 2 before this is ever called.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
