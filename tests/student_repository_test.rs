//! Student repository tests against SQLite in memory.

mod common;

use std::collections::HashSet;

use uuid::Uuid;

use admissions_api::domain::{
    Programme, RawStudentQuery, SortField, SortOrder, StudentFilter, StudentQuery,
};
use admissions_api::infra::{StudentRepository, StudentStore};
use admissions_api::types::PageParams;

use common::{new_student, test_database};

async fn store() -> StudentStore {
    StudentStore::new(test_database().await.get_connection())
}

fn query(filter: StudentFilter, page: u64) -> StudentQuery {
    StudentQuery {
        filter,
        page: PageParams::new(page),
        ..StudentQuery::default()
    }
}

// =============================================================================
// Create / find
// =============================================================================

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let repo = store().await;

    let first = repo
        .create(new_student("Kwame", "Mensah", Programme::Science, 2024))
        .await
        .unwrap();
    let second = repo
        .create(new_student("Kwame", "Mensah", Programme::Science, 2024))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert!(first.bece_result_file.is_none());
    assert_eq!(first.created_at, first.updated_at);

    let found = repo.find_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(found.first_name, "Kwame");
    assert_eq!(found.programme, Programme::Science);
    assert_eq!(found.previous_school.as_deref(), Some("Accra Basic School"));
}

#[tokio::test]
async fn test_find_unknown_id() {
    let repo = store().await;
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_pagination_covers_every_record_once() {
    let repo = store().await;
    for i in 0..23 {
        repo.create(new_student(&format!("Student{:02}", i), "Boateng", Programme::Business, 2024))
            .await
            .unwrap();
    }

    let mut seen = HashSet::new();
    for page in 1..=3 {
        let (students, total) = repo
            .search(&query(StudentFilter::default(), page))
            .await
            .unwrap();
        assert_eq!(total, 23);
        assert!(students.len() <= 10);
        for student in students {
            assert!(seen.insert(student.id), "student listed twice");
        }
    }
    assert_eq!(seen.len(), 23);

    let (past_end, total) = repo
        .search(&query(StudentFilter::default(), 4))
        .await
        .unwrap();
    assert!(past_end.is_empty());
    assert_eq!(total, 23);
}

#[tokio::test]
async fn test_huge_page_numbers_return_empty_page() {
    let repo = store().await;
    repo.create(new_student("Kwame", "Mensah", Programme::Science, 2024))
        .await
        .unwrap();

    for page in [5, 1_000_000_000_000_000_000, i64::MAX as u64, u64::MAX] {
        let (students, total) = repo
            .search(&query(StudentFilter::default(), page))
            .await
            .unwrap();
        assert!(students.is_empty(), "page {}", page);
        assert_eq!(total, 1, "page {}", page);
    }
}

#[tokio::test]
async fn test_default_order_is_newest_first() {
    let repo = store().await;
    let older = repo
        .create(new_student("Older", "One", Programme::Science, 2024))
        .await
        .unwrap();
    let newer = repo
        .create(new_student("Newer", "Two", Programme::Science, 2024))
        .await
        .unwrap();

    let (students, _) = repo
        .search(&query(StudentFilter::default(), 1))
        .await
        .unwrap();

    assert_eq!(students[0].id, newer.id);
    assert_eq!(students[1].id, older.id);
}

#[tokio::test]
async fn test_sort_by_surname_ascending() {
    let repo = store().await;
    for surname in ["Owusu", "Addo", "Mensah"] {
        repo.create(new_student("Ama", surname, Programme::VisualArts, 2023))
            .await
            .unwrap();
    }

    let query = StudentQuery {
        sort_by: SortField::Surname,
        sort_order: SortOrder::Asc,
        ..StudentQuery::default()
    };
    let (students, _) = repo.search(&query).await.unwrap();
    let surnames: Vec<&str> = students.iter().map(|s| s.surname.as_str()).collect();

    assert_eq!(surnames, vec!["Addo", "Mensah", "Owusu"]);
}

#[tokio::test]
async fn test_name_filter_is_case_insensitive_substring() {
    let repo = store().await;
    repo.create(new_student("Kwame", "Mensah", Programme::Science, 2024))
        .await
        .unwrap();
    let mut with_middle = new_student("Esi", "Asante", Programme::Science, 2024);
    with_middle.middle_names = Some("Mensa Adjoa".to_string());
    repo.create(with_middle).await.unwrap();
    repo.create(new_student("Kofi", "Boateng", Programme::Science, 2024))
        .await
        .unwrap();

    for term in ["mens", "MENS", "Mens"] {
        let filter = StudentFilter {
            name: Some(term.to_string()),
            ..StudentFilter::default()
        };
        let (students, total) = repo.search(&query(filter, 1)).await.unwrap();
        assert_eq!(total, 2, "term {:?}", term);
        assert!(students.iter().all(|s| s.first_name != "Kofi"));
    }
}

#[tokio::test]
async fn test_name_filter_folds_ascii_around_accented_letters() {
    let repo = store().await;
    repo.create(new_student("Adèle", "Quaye", Programme::Science, 2024))
        .await
        .unwrap();

    for term in ["adèle", "ADÈLE", "dèl"] {
        let filter = StudentFilter {
            name: Some(term.to_string()),
            ..StudentFilter::default()
        };
        let (_, total) = repo.search(&query(filter, 1)).await.unwrap();
        assert_eq!(total, 1, "term {:?}", term);
    }
}

#[tokio::test]
async fn test_name_filter_treats_wildcards_literally() {
    let repo = store().await;
    repo.create(new_student("Kwame", "Mensah", Programme::Science, 2024))
        .await
        .unwrap();

    let filter = StudentFilter {
        name: Some("%".to_string()),
        ..StudentFilter::default()
    };
    let (_, total) = repo.search(&query(filter, 1)).await.unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_filters_are_combined() {
    let repo = store().await;
    repo.create(new_student("Kwame", "Mensah", Programme::Science, 2024))
        .await
        .unwrap();
    repo.create(new_student("Kwame", "Mensah", Programme::Science, 2023))
        .await
        .unwrap();
    repo.create(new_student("Kwame", "Mensah", Programme::Business, 2024))
        .await
        .unwrap();

    let parsed = StudentQuery::parse(RawStudentQuery {
        year: Some("2024"),
        programme: Some("science"),
        name: Some("kwa"),
        ..RawStudentQuery::default()
    })
    .unwrap();

    let (students, total) = repo.search(&parsed).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(students[0].year_of_admission, 2024);
    assert_eq!(students[0].programme, Programme::Science);
}

// =============================================================================
// Summary
// =============================================================================

#[tokio::test]
async fn test_count_by_programme_with_year() {
    let repo = store().await;
    for (programme, year) in [
        (Programme::Science, 2024),
        (Programme::Science, 2024),
        (Programme::GeneralArts, 2024),
        (Programme::Science, 2023),
    ] {
        repo.create(new_student("Yaw", "Darko", programme, year))
            .await
            .unwrap();
    }

    let mut all = repo.count_by_programme(None).await.unwrap();
    all.sort_by_key(|(p, _)| p.label());
    assert_eq!(all, vec![(Programme::GeneralArts, 1), (Programme::Science, 3)]);

    let mut in_2024 = repo.count_by_programme(Some(2024)).await.unwrap();
    in_2024.sort_by_key(|(p, _)| p.label());
    assert_eq!(in_2024, vec![(Programme::GeneralArts, 1), (Programme::Science, 2)]);

    assert!(repo.count_by_programme(Some(1999)).await.unwrap().is_empty());
}

// =============================================================================
// Document attachment
// =============================================================================

#[tokio::test]
async fn test_attach_document_only_once() {
    let repo = store().await;
    let student = repo
        .create(new_student("Abena", "Osei", Programme::HomeEconomics, 2024))
        .await
        .unwrap();

    let updated = repo
        .attach_document(student.id, "1-first.pdf")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.bece_result_file.as_deref(), Some("1-first.pdf"));
    assert!(updated.updated_at >= student.updated_at);

    let second = repo.attach_document(student.id, "2-second.pdf").await.unwrap();
    assert!(second.is_none());

    let stored = repo.find_by_id(student.id).await.unwrap().unwrap();
    assert_eq!(stored.bece_result_file.as_deref(), Some("1-first.pdf"));
}

#[tokio::test]
async fn test_attach_document_unknown_student() {
    let repo = store().await;
    let result = repo.attach_document(Uuid::new_v4(), "1-x.pdf").await.unwrap();
    assert!(result.is_none());
}
