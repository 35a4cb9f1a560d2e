//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use sea_orm::ConnectOptions;

use admissions_api::domain::{NewStudent, Programme};
use admissions_api::infra::Database;

/// Fresh SQLite in-memory database with all migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn test_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect_with(options)
        .await
        .expect("failed to open sqlite database");
    db.run_migrations().await.expect("failed to run migrations");
    db
}

/// A valid new student with the given names, programme and year
pub fn new_student(first_name: &str, surname: &str, programme: Programme, year: i32) -> NewStudent {
    NewStudent {
        first_name: first_name.to_string(),
        surname: surname.to_string(),
        middle_names: None,
        date_of_birth: NaiveDate::from_ymd_opt(2009, 3, 14).unwrap(),
        year_of_admission: year,
        programme,
        previous_school: Some("Accra Basic School".to_string()),
        bece_aggregate: 10,
        mother_name: None,
        mother_contact: None,
        father_name: None,
        father_contact: None,
    }
}

/// Registration payload as a browser form would post it
pub fn registration_json(first_name: &str, surname: &str, programme: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": first_name,
        "surname": surname,
        "middleNames": "",
        "dateOfBirth": "2009-03-14",
        "yearOfAdmission": "2024",
        "programme": programme,
        "previousSchool": "Accra Basic School",
        "beceAggregate": 8,
        "motherName": "Akosua Mensah",
        "motherContact": "0244000000"
    })
}
