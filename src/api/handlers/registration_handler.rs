//! Registration handlers.

use axum::{extract::State, routing::post, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Student, StudentForm};
use crate::errors::AppResult;
use crate::types::Created;

/// Registration response body (wrapped in the success envelope)
#[derive(Debug, Serialize, ToSchema)]
pub struct Registered {
    pub student: Student,
}

/// Create registration routes
pub fn registration_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Registration",
    request_body = StudentForm,
    responses(
        (status = 201, description = "Student registered successfully", body = Registered),
        (status = 400, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(form): ValidatedJson<StudentForm>,
) -> AppResult<Created<Registered>> {
    let student = state.registration_service.register(form).await?;
    Ok(Created(Registered { student }))
}
