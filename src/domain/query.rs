//! Directory query: filters, sort order and page selection.

use std::str::FromStr;

use crate::errors::{AppError, AppResult};
use crate::types::PageParams;
use crate::utils::form::non_blank;

use super::Programme;

/// Columns the directory may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    FirstName,
    Surname,
    MiddleNames,
    DateOfBirth,
    YearOfAdmission,
    Programme,
    BeceAggregate,
}

impl SortField {
    /// Every sortable field with its API name
    pub const ALL: [(SortField, &'static str); 9] = [
        (SortField::CreatedAt, "createdAt"),
        (SortField::UpdatedAt, "updatedAt"),
        (SortField::FirstName, "firstName"),
        (SortField::Surname, "surname"),
        (SortField::MiddleNames, "middleNames"),
        (SortField::DateOfBirth, "dateOfBirth"),
        (SortField::YearOfAdmission, "yearOfAdmission"),
        (SortField::Programme, "programme"),
        (SortField::BeceAggregate, "beceAggregate"),
    ];

    /// API name of the field
    pub fn as_str(&self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, name)| *name)
            .unwrap_or("createdAt")
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(field, _)| *field)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|(_, name)| *name).collect();
                AppError::validation(format!(
                    "Cannot sort by '{}'; sortBy must be one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(AppError::validation("sortOrder must be 'asc' or 'desc'"))
        }
    }
}

/// Criteria shared by the listing and the summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    /// Exact year of admission
    pub year: Option<i32>,
    /// Exact programme
    pub programme: Option<Programme>,
    /// Case-insensitive substring of first name, surname or middle names
    pub name: Option<String>,
}

/// A fully parsed directory listing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentQuery {
    pub filter: StudentFilter,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: PageParams,
}

/// Raw, untyped listing parameters as they arrive on the query string
#[derive(Debug, Clone, Default)]
pub struct RawStudentQuery<'a> {
    pub page: Option<&'a str>,
    pub year: Option<&'a str>,
    pub programme: Option<&'a str>,
    pub name: Option<&'a str>,
    pub sort_by: Option<&'a str>,
    pub sort_order: Option<&'a str>,
}

impl StudentQuery {
    /// Parse raw parameters; blank values are treated as absent.
    pub fn parse(raw: RawStudentQuery<'_>) -> AppResult<Self> {
        let filter = StudentFilter {
            year: parse_year_filter(raw.year)?,
            programme: non_blank(raw.programme)
                .map(str::parse::<Programme>)
                .transpose()?,
            name: non_blank(raw.name).map(str::to_string),
        };

        let sort_by = non_blank(raw.sort_by)
            .map(str::parse::<SortField>)
            .transpose()?
            .unwrap_or_default();
        let sort_order = non_blank(raw.sort_order)
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            filter,
            sort_by,
            sort_order,
            page: PageParams::from_raw(raw.page),
        })
    }
}

/// Parse an optional year filter; blank means "all years".
pub fn parse_year_filter(raw: Option<&str>) -> AppResult<Option<i32>> {
    non_blank(raw)
        .map(|year| {
            year.parse::<i32>()
                .map_err(|_| AppError::validation("year must be a whole number"))
        })
        .transpose()
}
