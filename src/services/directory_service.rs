//! Directory service - Read-side queries over registered students.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{ProgrammeSummary, Student, StudentQuery};
use crate::errors::AppResult;
use crate::infra::StudentRepository;
use crate::types::Paginated;

/// Directory service trait for dependency injection.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Filtered, sorted, paginated listing
    async fn list_students(&self, query: StudentQuery) -> AppResult<Paginated<Student>>;

    /// Student counts for every programme, optionally for one admission year
    async fn summary(&self, year: Option<i32>) -> AppResult<ProgrammeSummary>;
}

/// Concrete implementation of DirectoryService
pub struct StudentDirectory {
    students: Arc<dyn StudentRepository>,
}

impl StudentDirectory {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}

#[async_trait]
impl DirectoryService for StudentDirectory {
    async fn list_students(&self, query: StudentQuery) -> AppResult<Paginated<Student>> {
        let (students, total) = self.students.search(&query).await?;

        tracing::debug!(
            page = query.page.page,
            total,
            sort_by = query.sort_by.as_str(),
            "Listed students"
        );

        Ok(Paginated::new(
            students,
            query.page.page,
            query.page.limit(),
            total,
        ))
    }

    async fn summary(&self, year: Option<i32>) -> AppResult<ProgrammeSummary> {
        let counts = self.students.count_by_programme(year).await?;
        Ok(ProgrammeSummary::from_counts(counts))
    }
}
