//! Student directory handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::domain::{query::parse_year_filter, ProgrammeSummary, RawStudentQuery, Student, StudentQuery};
use crate::errors::{AppError, AppResult};
use crate::types::Paginated;

/// Listing query parameters.
///
/// Kept as raw text so bad values produce domain validation messages
/// instead of generic extractor rejections.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListStudentsParams {
    /// 1-based page number, defaults to 1
    pub page: Option<String>,
    /// Exact year of admission
    pub year: Option<String>,
    /// Programme label, e.g. "General Arts"
    pub programme: Option<String>,
    /// Case-insensitive substring of any name part
    pub name: Option<String>,
    /// One of createdAt, updatedAt, firstName, surname, middleNames,
    /// dateOfBirth, yearOfAdmission, programme, beceAggregate
    pub sort_by: Option<String>,
    /// asc or desc (default desc)
    pub sort_order: Option<String>,
}

impl ListStudentsParams {
    fn as_raw(&self) -> RawStudentQuery<'_> {
        RawStudentQuery {
            page: self.page.as_deref(),
            year: self.year.as_deref(),
            programme: self.programme.as_deref(),
            name: self.name.as_deref(),
            sort_by: self.sort_by.as_deref(),
            sort_order: self.sort_order.as_deref(),
        }
    }
}

/// Summary query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryParams {
    /// Restrict counts to one year of admission
    pub year: Option<String>,
}

/// One page of the student directory
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentListResponse {
    pub students: Vec<Student>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
}

impl From<Paginated<Student>> for StudentListResponse {
    fn from(page: Paginated<Student>) -> Self {
        Self {
            students: page.items,
            total: page.total,
            total_pages: page.total_pages,
            page: page.page,
        }
    }
}

/// Create student directory routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students))
        .route("/summary", get(summary))
}

/// List students with filters, sorting and pagination (10 per page)
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    params(ListStudentsParams),
    responses(
        (status = 200, description = "One page of students", body = StudentListResponse),
        (status = 400, description = "Invalid filter or sort parameter")
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    params: Result<Query<ListStudentsParams>, QueryRejection>,
) -> AppResult<Json<StudentListResponse>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let query = StudentQuery::parse(params.as_raw())?;

    let page = state.directory_service.list_students(query).await?;
    Ok(Json(page.into()))
}

/// Student counts per programme
#[utoipa::path(
    get,
    path = "/api/summary",
    tag = "Students",
    params(SummaryParams),
    responses(
        (status = 200, description = "Count for every programme", body = ProgrammeSummary),
        (status = 400, description = "Invalid year")
    )
)]
pub async fn summary(
    State(state): State<AppState>,
    params: Result<Query<SummaryParams>, QueryRejection>,
) -> AppResult<Json<ProgrammeSummary>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let year = parse_year_filter(params.year.as_deref())?;

    let summary = state.directory_service.summary(year).await?;
    Ok(Json(summary))
}
