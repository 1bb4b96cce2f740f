//! Employee endpoint tests over the full middleware stack.

mod common;

use axum::Router;
use chrono::{Local, Months};
use http::StatusCode;
use serde_json::{Value, json};

use common::{app, delete, get, post, put};

/// A birthday comfortably inside the accepted 18..60 year window.
fn birthday_years_ago(years: u32) -> String {
    (Local::now().date_naive() - Months::new(12 * years))
        .format("%Y-%m-%d")
        .to_string()
}

async fn seed_department(app: &Router, name: &str, min: f64, max: f64) -> i64 {
    let (status, body) = post(
        app,
        "/api/departments",
        json!({"name": name, "min_salary": min, "max_salary": max}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn seed_employee(app: &Router, name: &str, salary: f64, dept_id: i64) -> Value {
    let (status, body) = post(
        app,
        "/api/employees",
        json!({
            "name": name,
            "surname": "Petrov",
            "birthday": birthday_years_ago(30),
            "salary": salary,
            "department": {"id": dept_id}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn create_capitalizes_names_and_embeds_department() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;

    let (status, body) = post(
        &app,
        "/api/employees",
        json!({
            "name": "aNNa",
            "surname": "pEtRoV",
            "birthday": birthday_years_ago(30),
            "salary": 2000.0,
            "department": {"id": dept_id}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Anna");
    assert_eq!(body["surname"], "Petrov");
    assert_eq!(body["department"]["name"], "SALES");
    assert_eq!(body["department"]["min_salary"], 850.0);
}

#[tokio::test]
async fn create_requires_id_only_department_reference() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;

    let (status, body) = post(
        &app,
        "/api/employees",
        json!({
            "name": "Anna",
            "surname": "Petrov",
            "birthday": birthday_years_ago(30),
            "salary": 2000.0,
            "department": {"id": dept_id, "name": "SALES"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Write only the id field for the department");

    let (status, body) = post(
        &app,
        "/api/employees",
        json!({
            "name": "Anna",
            "surname": "Petrov",
            "birthday": birthday_years_ago(30),
            "salary": 2000.0,
            "department": {"id": 0}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "You must write the department (only the id field) for a new employee"
    );

    let (status, body) = post(
        &app,
        "/api/employees",
        json!({
            "name": "Anna",
            "surname": "Petrov",
            "birthday": birthday_years_ago(30),
            "salary": 2000.0,
            "department": {"id": 42}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No department with ID = 42 was found");
}

#[tokio::test]
async fn create_enforces_age_window() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;

    for years in [17, 61] {
        let (status, body) = post(
            &app,
            "/api/employees",
            json!({
                "name": "Anna",
                "surname": "Petrov",
                "birthday": birthday_years_ago(years),
                "salary": 2000.0,
                "department": {"id": dept_id}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "The employee must be over 18 years old and under 60 years old"
        );
    }
}

#[tokio::test]
async fn create_enforces_department_salary_range() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;

    let payload = |salary: f64| {
        json!({
            "name": "Anna",
            "surname": "Petrov",
            "birthday": birthday_years_ago(30),
            "salary": salary,
            "department": {"id": dept_id}
        })
    };

    let (status, body) = post(&app, "/api/employees", payload(700.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The salary must be >= the min_salary of the employee's department"
    );

    let (status, body) = post(&app, "/api/employees", payload(5100.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "The salary must be <= the max_salary of the employee's department"
    );
}

#[tokio::test]
async fn update_rejects_birthday_edits() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;
    let employee = seed_employee(&app, "Anna", 2000.0, dept_id).await;

    let (status, body) = put(
        &app,
        "/api/employees",
        json!({"id": employee["id"], "birthday": birthday_years_ago(31)}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "immutable_field");
    assert_eq!(body["message"], "You can not edit the date of birth");
}

#[tokio::test]
async fn update_rejects_salary_edit_without_department() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;
    let employee = seed_employee(&app, "Anna", 2000.0, dept_id).await;

    // Deleting the department leaves the employee unassigned.
    let (status, _) = delete(&app, &format!("/api/departments/{dept_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = put(
        &app,
        "/api/employees",
        json!({"id": employee["id"], "salary": 2500.0}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        "You can not edit the salary field because the department field is null"
    );
}

#[tokio::test]
async fn transfer_promotes_salary_to_new_minimum() {
    let app = app();
    let sales = seed_department(&app, "SALES", 850.0, 5000.0).await;
    let management = seed_department(&app, "MANAGEMENT", 6000.0, 10000.0).await;
    let employee = seed_employee(&app, "Anna", 2000.0, sales).await;

    let (status, body) = put(
        &app,
        "/api/employees",
        json!({"id": employee["id"], "department": {"id": management}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["salary"], 6000.0);
    assert_eq!(body["department"]["name"], "MANAGEMENT");
}

#[tokio::test]
async fn transfer_demotes_salary_to_new_maximum() {
    let app = app();
    let management = seed_department(&app, "MANAGEMENT", 6000.0, 10000.0).await;
    let sales = seed_department(&app, "SALES", 850.0, 5000.0).await;
    let employee = seed_employee(&app, "Anna", 6000.0, management).await;

    let (status, body) = put(
        &app,
        "/api/employees",
        json!({"id": employee["id"], "department": {"id": sales}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["salary"], 5000.0);
    assert_eq!(body["department"]["name"], "SALES");
}

#[tokio::test]
async fn by_department_sorts_and_skips_unassigned() {
    let app = app();
    let sales = seed_department(&app, "SALES", 850.0, 5000.0).await;
    let admin = seed_department(&app, "ADMIN", 850.0, 5000.0).await;
    let temp = seed_department(&app, "TEMP", 850.0, 5000.0).await;
    seed_employee(&app, "Anna", 2000.0, sales).await;
    seed_employee(&app, "Boris", 2000.0, admin).await;
    seed_employee(&app, "Clara", 2000.0, temp).await;

    // Clara loses her department and drops out of the grouping.
    delete(&app, &format!("/api/departments/{temp}")).await;

    let (status, body) = get(&app, "/api/employees/by-department").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["department_name"], "ADMIN");
    assert_eq!(rows[0]["name"], "Boris");
    assert_eq!(rows[1]["department_name"], "SALES");
    assert_eq!(rows[1]["name"], "Anna");
}

#[tokio::test]
async fn born_in_search_handles_single_day_and_reversed_ranges() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;
    seed_employee(&app, "Anna", 2000.0, dept_id).await;

    let day = birthday_years_ago(30);
    let before = birthday_years_ago(31);
    let after = birthday_years_ago(29);

    let (status, body) = get(
        &app,
        &format!("/api/employees/search-for-employees-born-in/{day}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Anna");

    // Reversed bounds are reordered before the query runs.
    let (status, body) = get(
        &app,
        &format!("/api/employees/search-for-employees-born-in/{after}/{before}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get(
        &app,
        &format!("/api/employees/search-for-employees-born-in/{before}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No matching records were found");

    let (status, body) = get(
        &app,
        "/api/employees/search-for-employees-born-in/30-06-1990",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_field");
}

#[tokio::test]
async fn delete_removes_employee_and_reports_success() {
    let app = app();
    let dept_id = seed_department(&app, "SALES", 850.0, 5000.0).await;
    let employee = seed_employee(&app, "Anna", 2000.0, dept_id).await;
    let id = employee["id"].as_i64().unwrap();

    let (status, body) = delete(&app, &format!("/api/employees/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Employee with ID = {id} was successfully deleted")
    );

    let (status, body) = get(&app, &format!("/api/employees/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("No employee with ID = {id} was found"));
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
