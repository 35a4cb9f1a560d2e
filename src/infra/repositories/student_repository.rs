//! Student repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Condition, Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use super::entities::student::{self, ActiveModel, Entity as StudentEntity};
use crate::domain::{NewStudent, Programme, SortField, SortOrder, Student, StudentFilter, StudentQuery};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Student repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a new student with a fresh identifier
    async fn create(&self, student: NewStudent) -> AppResult<Student>;

    /// Find student by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>>;

    /// Record the stored document filename.
    ///
    /// Only succeeds while the student has no document yet; returns `None`
    /// when no row matched (missing student or document already attached).
    async fn attach_document(&self, id: Uuid, filename: &str) -> AppResult<Option<Student>>;

    /// One page of students matching the query, plus the filtered total
    async fn search(&self, query: &StudentQuery) -> AppResult<(Vec<Student>, u64)>;

    /// Student counts grouped by programme, optionally restricted to a year
    async fn count_by_programme(&self, year: Option<i32>) -> AppResult<Vec<(Programme, u64)>>;
}

/// Concrete implementation of StudentRepository
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct ProgrammeCount {
    programme: String,
    count: i64,
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn create(&self, student: NewStudent) -> AppResult<Student> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(student.first_name),
            surname: Set(student.surname),
            middle_names: Set(student.middle_names),
            date_of_birth: Set(student.date_of_birth),
            year_of_admission: Set(student.year_of_admission),
            programme: Set(student.programme.into()),
            previous_school: Set(student.previous_school),
            bece_aggregate: Set(student.bece_aggregate),
            mother_name: Set(student.mother_name),
            mother_contact: Set(student.mother_contact),
            father_name: Set(student.father_name),
            father_contact: Set(student.father_contact),
            bece_result_file: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Student::try_from(model)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        StudentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(Student::try_from)
            .transpose()
    }

    async fn attach_document(&self, id: Uuid, filename: &str) -> AppResult<Option<Student>> {
        let result = StudentEntity::update_many()
            .col_expr(student::Column::BeceResultFile, Expr::value(filename))
            .col_expr(student::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(student::Column::Id.eq(id))
            .filter(student::Column::BeceResultFile.is_null())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn search(&self, query: &StudentQuery) -> AppResult<(Vec<Student>, u64)> {
        let order = match query.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        // Identifier tie-break keeps page boundaries stable
        let paginator = filtered(&query.filter)
            .order_by(sort_column(query.sort_by), order)
            .order_by_asc(student::Column::Id)
            .paginate(&self.db, query.page.limit());

        let total = paginator.num_items().await?;

        // Past the last row: nothing to fetch, and huge offsets would overflow the binder
        if query.page.offset() >= total {
            return Ok((Vec::new(), total));
        }

        let models = paginator.fetch_page(query.page.index()).await?;

        let students = models
            .into_iter()
            .map(Student::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok((students, total))
    }

    async fn count_by_programme(&self, year: Option<i32>) -> AppResult<Vec<(Programme, u64)>> {
        let filter = StudentFilter {
            year,
            ..StudentFilter::default()
        };

        let rows = filtered(&filter)
            .select_only()
            .column(student::Column::Programme)
            .column_as(Expr::col(student::Column::Id).count(), "count")
            .group_by(student::Column::Programme)
            .into_model::<ProgrammeCount>()
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|row| {
                let programme = row.programme.parse::<Programme>().map_err(|_| {
                    AppError::internal(format!("unknown programme '{}' in counts", row.programme))
                })?;
                Ok((programme, row.count.max(0) as u64))
            })
            .collect()
    }
}

/// Base select with all provided filters ANDed together
fn filtered(filter: &StudentFilter) -> Select<StudentEntity> {
    let mut select = StudentEntity::find();

    if let Some(year) = filter.year {
        select = select.filter(student::Column::YearOfAdmission.eq(year));
    }
    if let Some(programme) = filter.programme {
        select = select.filter(student::Column::Programme.eq(programme.label()));
    }
    if let Some(name) = &filter.name {
        select = select.filter(name_condition(name));
    }

    select
}

/// `lower(col) LIKE %term%` over first name, surname and middle names, ORed.
///
/// SQLite's `LOWER()` folds ASCII letters only, so there an uppercase
/// non-ASCII letter in a stored name ("ÉLISE") is not matched by its
/// lowercase form. Postgres folds the full Unicode range.
fn name_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    [
        student::Column::FirstName,
        student::Column::Surname,
        student::Column::MiddleNames,
    ]
    .into_iter()
    .fold(Condition::any(), |condition, column| {
        condition.add(
            Expr::expr(Func::lower(Expr::col(column)))
                .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
        )
    })
}

// Needs no quoting in any backend's string literal syntax
const LIKE_ESCAPE: char = '!';

/// Escape LIKE wildcards so they match literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn sort_column(field: SortField) -> student::Column {
    match field {
        SortField::CreatedAt => student::Column::CreatedAt,
        SortField::UpdatedAt => student::Column::UpdatedAt,
        SortField::FirstName => student::Column::FirstName,
        SortField::Surname => student::Column::Surname,
        SortField::MiddleNames => student::Column::MiddleNames,
        SortField::DateOfBirth => student::Column::DateOfBirth,
        SortField::YearOfAdmission => student::Column::YearOfAdmission,
        SortField::Programme => student::Column::Programme,
        SortField::BeceAggregate => student::Column::BeceAggregate,
    }
}
