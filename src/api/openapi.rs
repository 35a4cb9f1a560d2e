//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{registration_handler, student_handler, upload_handler};
use crate::domain::{Programme, ProgrammeSummary, Student, StudentForm};

/// OpenAPI documentation for the Student Admissions API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Admissions API",
        version = "0.1.0",
        description = "Senior high school admissions: registration, BECE result uploads and the student directory",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        registration_handler::register,
        upload_handler::upload_bece_result,
        student_handler::list_students,
        student_handler::summary,
    ),
    components(
        schemas(
            // Domain types
            Programme,
            Student,
            StudentForm,
            ProgrammeSummary,
            // Handler types
            registration_handler::Registered,
            upload_handler::UploadForm,
            upload_handler::Uploaded,
            student_handler::StudentListResponse,
        )
    ),
    tags(
        (name = "Registration", description = "Student registration"),
        (name = "Uploads", description = "BECE result documents"),
        (name = "Students", description = "Directory listing and programme summary")
    )
)]
pub struct ApiDoc;
