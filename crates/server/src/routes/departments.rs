//! Read-only `/departments` resource.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use service::department::Department;
use service::student::Student;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct CountOutput { pub count: usize }

#[utoipa::path(
    get, path = "/departments/", tag = "departments",
    responses((status = 200, description = "All departments", body = [crate::openapi::DepartmentDoc]))
)]
pub async fn list_departments(State(state): State<ServerState>) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(state.departments.get_departments().await?))
}

#[utoipa::path(
    get, path = "/departments/{name}", tag = "departments",
    params(("name" = String, Path, description = "Exact department name")),
    responses(
        (status = 200, description = "Department", body = crate::openapi::DepartmentDoc),
        (status = 404, description = "No such department")
    )
)]
pub async fn get_department(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<Department>, ApiError> {
    state
        .departments
        .get_department_by_name(Some(&name))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("department {name} not found")))
}

async fn students_of(state: &ServerState, name: &str) -> Result<Vec<Student>, ApiError> {
    state
        .students
        .get_students_by_department(Some(name))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("department {name} not found")))
}

#[utoipa::path(
    get, path = "/departments/{name}/students", tag = "departments",
    params(("name" = String, Path, description = "Exact department name")),
    responses(
        (status = 200, description = "Students of the department", body = [crate::openapi::StudentDoc]),
        (status = 404, description = "No such department")
    )
)]
pub async fn department_students(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(students_of(&state, &name).await?))
}

#[utoipa::path(
    get, path = "/departments/{name}/count", tag = "departments",
    params(("name" = String, Path, description = "Exact department name")),
    responses(
        (status = 200, description = "Number of students", body = crate::openapi::CountDoc),
        (status = 404, description = "No such department")
    )
)]
pub async fn department_count(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<CountOutput>, ApiError> {
    let count = students_of(&state, &name).await?.len();
    Ok(Json(CountOutput { count }))
}
