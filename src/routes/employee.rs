//! Employee routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::{parse_date, parse_id};
use crate::core::error::{Message, message};
use crate::core::{AppError, ServerState};
use crate::db::models::{Employee, EmployeeDraft, EmployeeSummary};
use crate::service;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employees", get(list).post(create).put(update))
        .route("/api/employees/by-department", get(by_department))
        .route(
            "/api/employees/search-for-employees-born-in/{date}",
            get(search_single_day),
        )
        .route(
            "/api/employees/search-for-employees-born-in/{first}/{second}",
            get(search_range),
        )
        .route("/api/employees/{id}", get(get_one).delete(remove))
}

async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Employee>>, AppError> {
    Ok(Json(service::employee::list(state.store.as_ref()).await?))
}

async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let id = parse_id(&id)?;
    Ok(Json(service::employee::get(state.store.as_ref(), id).await?))
}

async fn by_department(
    State(state): State<ServerState>,
) -> Result<Json<Vec<EmployeeSummary>>, AppError> {
    Ok(Json(
        service::employee::by_department(state.store.as_ref()).await?,
    ))
}

async fn search_single_day(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<EmployeeSummary>>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(
        service::employee::born_between(state.store.as_ref(), date, date).await?,
    ))
}

async fn search_range(
    State(state): State<ServerState>,
    Path((first, second)): Path<(String, String)>,
) -> Result<Json<Vec<EmployeeSummary>>, AppError> {
    let first = parse_date(&first)?;
    let second = parse_date(&second)?;
    Ok(Json(
        service::employee::born_between(state.store.as_ref(), first, second).await?,
    ))
}

async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<EmployeeDraft>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let created = service::employee::create(state.store.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<ServerState>,
    Json(draft): Json<EmployeeDraft>,
) -> Result<Json<Employee>, AppError> {
    Ok(Json(
        service::employee::update(state.store.as_ref(), draft).await?,
    ))
}

async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    let id = parse_id(&id)?;
    service::employee::delete(state.store.as_ref(), id).await?;
    Ok(message(format!(
        "Employee with ID = {id} was successfully deleted"
    )))
}
