//! Department routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::parse_id;
use crate::core::error::{Message, message};
use crate::core::{AppError, ServerState};
use crate::db::models::{AverageSalaryRow, Department, DepartmentDraft};
use crate::service;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/departments",
            get(list).post(create).put(update),
        )
        .route(
            "/api/departments/average-salary-by-department",
            get(average_salary),
        )
        .route("/api/departments/{id}", get(get_one).delete(remove))
}

async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Department>>, AppError> {
    Ok(Json(service::department::list(state.store.as_ref()).await?))
}

async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Department>, AppError> {
    let id = parse_id(&id)?;
    Ok(Json(service::department::get(state.store.as_ref(), id).await?))
}

async fn average_salary(
    State(state): State<ServerState>,
) -> Result<Json<Vec<AverageSalaryRow>>, AppError> {
    Ok(Json(
        service::department::average_salary(state.store.as_ref()).await?,
    ))
}

async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<DepartmentDraft>,
) -> Result<(StatusCode, Json<Department>), AppError> {
    let created = service::department::create(state.store.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<ServerState>,
    Json(draft): Json<DepartmentDraft>,
) -> Result<Json<Message>, AppError> {
    let outcome = service::department::update(state.store.as_ref(), draft).await?;
    let text = if !outcome.changed {
        "The department was not changed".to_string()
    } else if outcome.salaries_adjusted {
        "The department was successfully updated. One or more employees had their salary \
         changed to fit the department's salary range"
            .to_string()
    } else {
        "The department was successfully updated".to_string()
    };
    Ok(message(text))
}

async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    let id = parse_id(&id)?;
    service::department::delete(state.store.as_ref(), id).await?;
    Ok(message(format!(
        "Department with ID = {id} was successfully deleted"
    )))
}
