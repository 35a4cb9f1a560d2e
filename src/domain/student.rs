//! Student domain entity and registration data.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::Programme;
use crate::config::{
    MAX_BECE_AGGREGATE, MAX_CONTACT_LENGTH, MAX_LONG_TEXT_LENGTH, MAX_NAME_LENGTH,
    MIN_ADMISSION_YEAR, MIN_BECE_AGGREGATE,
};
use crate::errors::{AppError, AppResult};
use crate::utils::form::optional_text;

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Kwame")]
    pub first_name: String,
    #[schema(example = "Mensah")]
    pub surname: String,
    pub middle_names: Option<String>,
    #[schema(value_type = String, format = Date, example = "2009-03-14")]
    pub date_of_birth: NaiveDate,
    #[schema(example = 2024)]
    pub year_of_admission: i32,
    pub programme: Programme,
    pub previous_school: Option<String>,
    #[schema(example = 8)]
    pub bece_aggregate: i32,
    pub mother_name: Option<String>,
    pub mother_contact: Option<String>,
    pub father_name: Option<String>,
    pub father_contact: Option<String>,
    /// Stored filename of the uploaded BECE result (absent until uploaded)
    pub bece_result_file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Check whether the admission document has been uploaded
    pub fn has_document(&self) -> bool {
        self.bece_result_file.is_some()
    }
}

/// Registration form as submitted by the client.
///
/// Every value arrives as optional text so that both browser form posts and
/// typed JSON clients are accepted; `NewStudent::from_form` does the typing.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    #[serde(default, deserialize_with = "optional_text")]
    #[validate(
        required(message = "First name is required"),
        length(max = MAX_NAME_LENGTH, message = "First name is too long")
    )]
    #[schema(example = "Kwame")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(
        required(message = "Surname is required"),
        length(max = MAX_NAME_LENGTH, message = "Surname is too long")
    )]
    #[schema(example = "Mensah")]
    pub surname: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(length(max = MAX_LONG_TEXT_LENGTH, message = "Middle names are too long"))]
    #[schema(example = "Kofi")]
    pub middle_names: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(required(message = "Date of birth is required"))]
    #[schema(example = "2009-03-14")]
    pub date_of_birth: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(required(message = "Year of admission is required"))]
    #[schema(example = "2024")]
    pub year_of_admission: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(required(message = "Programme is required"))]
    #[schema(example = "Science")]
    pub programme: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(length(max = MAX_LONG_TEXT_LENGTH, message = "Previous school is too long"))]
    pub previous_school: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(required(message = "BECE aggregate is required"))]
    #[schema(example = "08")]
    pub bece_aggregate: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(length(max = MAX_NAME_LENGTH, message = "Mother's name is too long"))]
    pub mother_name: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(length(max = MAX_CONTACT_LENGTH, message = "Mother's contact is too long"))]
    pub mother_contact: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(length(max = MAX_NAME_LENGTH, message = "Father's name is too long"))]
    pub father_name: Option<String>,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(length(max = MAX_CONTACT_LENGTH, message = "Father's contact is too long"))]
    pub father_contact: Option<String>,
}

/// Validated, typed data for a student about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub first_name: String,
    pub surname: String,
    pub middle_names: Option<String>,
    pub date_of_birth: NaiveDate,
    pub year_of_admission: i32,
    pub programme: Programme,
    pub previous_school: Option<String>,
    pub bece_aggregate: i32,
    pub mother_name: Option<String>,
    pub mother_contact: Option<String>,
    pub father_name: Option<String>,
    pub father_contact: Option<String>,
}

impl NewStudent {
    /// Type and range-check a form against the calendar date `today`.
    ///
    /// Field presence and lengths are checked first (validator rules on
    /// `StudentForm`), then each typed field is parsed.
    pub fn from_form(form: StudentForm, today: NaiveDate) -> AppResult<Self> {
        form.validate()
            .map_err(|e| AppError::validation(validation_message(&e)))?;

        let date_of_birth = parse_date_of_birth(required(form.date_of_birth)?.as_str(), today)?;
        let year_of_admission =
            parse_admission_year(required(form.year_of_admission)?.as_str(), today)?;
        let programme = required(form.programme)?.parse::<Programme>()?;
        let bece_aggregate = parse_bece_aggregate(required(form.bece_aggregate)?.as_str())?;

        Ok(Self {
            first_name: required(form.first_name)?,
            surname: required(form.surname)?,
            middle_names: form.middle_names,
            date_of_birth,
            year_of_admission,
            programme,
            previous_school: form.previous_school,
            bece_aggregate,
            mother_name: form.mother_name,
            mother_contact: form.mother_contact,
            father_name: form.father_name,
            father_contact: form.father_contact,
        })
    }
}

impl TryFrom<StudentForm> for NewStudent {
    type Error = AppError;

    fn try_from(form: StudentForm) -> AppResult<Self> {
        NewStudent::from_form(form, Utc::now().date_naive())
    }
}

// Presence was already enforced by the validator; this only unwraps.
fn required(value: Option<String>) -> AppResult<String> {
    value.ok_or_else(|| AppError::validation("A required field is missing"))
}

/// Parse a year of admission, accepting 1900 up to next calendar year.
pub fn parse_admission_year(raw: &str, today: NaiveDate) -> AppResult<i32> {
    let latest = today.year() + 1;
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|year| (MIN_ADMISSION_YEAR..=latest).contains(year))
        .ok_or_else(|| {
            AppError::validation(format!(
                "Year of admission must be a year between {} and {}",
                MIN_ADMISSION_YEAR, latest
            ))
        })
}

fn parse_date_of_birth(raw: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .ok_or_else(|| {
            AppError::validation("Date of birth must be a valid date in YYYY-MM-DD format")
        })?;

    if date > today {
        return Err(AppError::validation("Date of birth cannot be in the future"));
    }

    Ok(date)
}

fn parse_bece_aggregate(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|aggregate| (MIN_BECE_AGGREGATE..=MAX_BECE_AGGREGATE).contains(aggregate))
        .ok_or_else(|| {
            AppError::validation(format!(
                "BECE aggregate must be a whole number between {} and {}",
                MIN_BECE_AGGREGATE, MAX_BECE_AGGREGATE
            ))
        })
}

/// Format validation errors into a single message, sorted by field name.
pub(crate) fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
