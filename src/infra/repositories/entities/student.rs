//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Programme, Student};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub surname: String,
    pub middle_names: Option<String>,
    pub date_of_birth: Date,
    pub year_of_admission: i32,
    /// Programme label, e.g. "General Arts"
    pub programme: String,
    pub previous_school: Option<String>,
    pub bece_aggregate: i32,
    pub mother_name: Option<String>,
    pub mother_contact: Option<String>,
    pub father_name: Option<String>,
    pub father_contact: Option<String>,
    /// Stored document filename (NULL until uploaded)
    pub bece_result_file: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Student {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let programme = model.programme.parse::<Programme>().map_err(|_| {
            AppError::internal(format!(
                "student {} has unknown programme '{}'",
                model.id, model.programme
            ))
        })?;

        Ok(Student {
            id: model.id,
            first_name: model.first_name,
            surname: model.surname,
            middle_names: model.middle_names,
            date_of_birth: model.date_of_birth,
            year_of_admission: model.year_of_admission,
            programme,
            previous_school: model.previous_school,
            bece_aggregate: model.bece_aggregate,
            mother_name: model.mother_name,
            mother_contact: model.mother_contact,
            father_name: model.father_name,
            father_contact: model.father_contact,
            bece_result_file: model.bece_result_file,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
