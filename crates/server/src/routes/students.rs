//! `/students` resource.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use service::student::{Student, StudentDto};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::observability::{STUDENTS_CREATED_TOTAL, STUDENTS_REMOVED_TOTAL};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/students/", tag = "students",
    responses((status = 200, description = "All students", body = [crate::openapi::StudentDoc]))
)]
pub async fn list_students(State(state): State<ServerState>) -> Result<Json<Vec<Student>>, ApiError> {
    let all = state.students.get_all().await?;
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = crate::openapi::StudentDoc),
        (status = 404, description = "No such student")
    )
)]
pub async fn get_student(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Student>, ApiError> {
    state
        .students
        .get_student_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("student {id} not found")))
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::StudentDtoDoc,
    responses(
        (status = 201, description = "Created; Location points at the new student"),
        (status = 400, description = "Invalid payload or unknown department")
    )
)]
pub async fn create_student(
    State(state): State<ServerState>,
    JsonBody(dto): JsonBody<StudentDto>,
) -> Result<impl IntoResponse, ApiError> {
    let student = state.students.student_from_dto(dto).await.map_err(ApiError::bad_request_from)?;
    let saved = state.students.add_student(student).await?;
    STUDENTS_CREATED_TOTAL.inc();
    let location = format!("/students/{}", saved.id);
    info!(student_id = saved.id, %location, "student_create_request");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

#[utoipa::path(
    put, path = "/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = crate::openapi::StudentDtoDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::StudentDoc),
        (status = 400, description = "Invalid payload or unknown department"),
        (status = 404, description = "No such student")
    )
)]
pub async fn update_student(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    JsonBody(dto): JsonBody<StudentDto>,
) -> Result<Json<Student>, ApiError> {
    if state.students.get_student_by_id(id).await?.is_none() {
        return Err(ApiError::not_found(format!("student {id} not found")));
    }
    let mut student = state.students.student_from_dto(dto).await.map_err(ApiError::bad_request_from)?;
    student.id = id;
    let saved = state.students.add_student(student).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No such student")
    )
)]
pub async fn remove_student(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    if state.students.get_student_by_id(id).await?.is_none() {
        return Err(ApiError::not_found(format!("student {id} not found")));
    }
    if state.students.remove_student_by_id(id).await? {
        STUDENTS_REMOVED_TOTAL.inc();
    }
    Ok(StatusCode::OK)
}
