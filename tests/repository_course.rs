mod common;

use sqlx::PgPool;
use std::sync::Arc;

use common::date;
use course_service::domain::entities::{CoursePatch, NewCourse};
use course_service::domain::repositories::{CourseFilters, CourseRepository, RepositoryError};
use course_service::infrastructure::persistence::PgCourseRepository;

fn new_course(id: &str, name: &str) -> NewCourse {
    NewCourse {
        id: id.to_string(),
        name: name.to_string(),
        start_date: date("2025-01-10"),
        end_date: date("2025-03-10"),
    }
}

#[sqlx::test]
async fn test_create_course(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    let course = repo.create(new_course("c-1", "Intro")).await.unwrap();

    assert_eq!(course.id, "c-1");
    assert_eq!(course.name, "Intro");
    assert_eq!(course.start_date, date("2025-01-10"));
    assert_eq!(course.end_date, date("2025-03-10"));
    assert_eq!(course.created_at, course.updated_at);
}

#[sqlx::test]
async fn test_create_duplicate_id_is_database_error(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    repo.create(new_course("dup", "First")).await.unwrap();
    let result = repo.create(new_course("dup", "Second")).await;

    assert!(matches!(result, Err(RepositoryError::Database(_))));
}

#[sqlx::test]
async fn test_inverted_range_rejected_by_constraint(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    let mut course = new_course("bad", "Inverted");
    course.start_date = date("2025-05-01");
    course.end_date = date("2025-04-01");

    let result = repo.create(course).await;

    assert!(matches!(result, Err(RepositoryError::Database(_))));
}

#[sqlx::test]
async fn test_get_course(pool: PgPool) {
    common::insert_course(&pool, "g-1", "Fetched", "2025-01-01", "2025-01-31").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    let course = repo.get("g-1").await.unwrap();

    assert_eq!(course.name, "Fetched");
    assert_eq!(course.end_date, date("2025-01-31"));
}

#[sqlx::test]
async fn test_get_missing_course(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    let result = repo.get("nope").await;

    assert!(result.unwrap_err().is_not_found());
}

#[sqlx::test]
async fn test_get_all_newest_first_with_window(pool: PgPool) {
    for i in 0..5 {
        sqlx::query(
            "INSERT INTO courses (id, name, start_date, end_date, created_at, updated_at)
             VALUES ($1, $2, '2025-01-01', '2025-02-01',
                     NOW() - make_interval(mins => $3), NOW() - make_interval(mins => $3))",
        )
        .bind(format!("w-{i}"))
        .bind(format!("Window {i}"))
        .bind(i)
        .execute(&pool)
        .await
        .unwrap();
    }
    let repo = PgCourseRepository::new(Arc::new(pool));

    let page = repo.get_all(CourseFilters::default(), 1, 2).await.unwrap();

    let ids: Vec<_> = page.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["w-1", "w-2"]);
}

#[sqlx::test]
async fn test_name_filter_is_case_insensitive_substring(pool: PgPool) {
    common::insert_course(&pool, "f-1", "Advanced Rust", "2025-01-01", "2025-02-01").await;
    common::insert_course(&pool, "f-2", "Go Basics", "2025-01-01", "2025-02-01").await;
    common::insert_course(&pool, "f-3", "rusty tools", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    let filters = CourseFilters::new("RUST");

    let total = repo.count(filters.clone()).await.unwrap();
    let courses = repo.get_all(filters, 0, 10).await.unwrap();

    assert_eq!(total, 2);
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c.name.to_lowercase().contains("rust")));
}

#[sqlx::test]
async fn test_name_filter_escapes_wildcards(pool: PgPool) {
    common::insert_course(&pool, "p-1", "100% Rust", "2025-01-01", "2025-02-01").await;
    common::insert_course(&pool, "p-2", "1000 Rust tips", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    let total = repo.count(CourseFilters::new("100%")).await.unwrap();

    assert_eq!(total, 1);
}

#[sqlx::test]
async fn test_count_without_filter(pool: PgPool) {
    common::insert_course(&pool, "n-1", "One", "2025-01-01", "2025-02-01").await;
    common::insert_course(&pool, "n-2", "Two", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    assert_eq!(repo.count(CourseFilters::default()).await.unwrap(), 2);
}

#[sqlx::test]
async fn test_update_only_supplied_fields(pool: PgPool) {
    common::insert_course(&pool, "u-1", "Before", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    let patch = CoursePatch {
        end_date: Some(date("2025-06-30")),
        ..Default::default()
    };
    repo.update("u-1", patch).await.unwrap();

    let course = repo.get("u-1").await.unwrap();
    assert_eq!(course.name, "Before");
    assert_eq!(course.start_date, date("2025-01-01"));
    assert_eq!(course.end_date, date("2025-06-30"));
    assert!(course.updated_at >= course.created_at);
}

#[sqlx::test]
async fn test_update_missing_course(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    let patch = CoursePatch {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = repo.update("ghost", patch).await;

    assert!(result.unwrap_err().is_not_found());
}

#[sqlx::test]
async fn test_empty_patch_checks_existence(pool: PgPool) {
    common::insert_course(&pool, "e-1", "Exists", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    assert!(repo.update("e-1", CoursePatch::default()).await.is_ok());
    assert!(
        repo.update("e-2", CoursePatch::default())
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[sqlx::test]
async fn test_delete_course(pool: PgPool) {
    common::insert_course(&pool, "d-1", "Doomed", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    repo.delete("d-1").await.unwrap();

    assert!(repo.get("d-1").await.unwrap_err().is_not_found());
    assert!(repo.delete("d-1").await.unwrap_err().is_not_found());
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_get_all_with_max_offset_and_limit(pool: PgPool) {
    common::insert_course(&pool, "m-1", "Only", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    let all = repo
        .get_all(CourseFilters::default(), 0, i64::MAX)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);

    let beyond = repo
        .get_all(CourseFilters::default(), i64::MAX, 10)
        .await
        .unwrap();
    assert!(beyond.is_empty());
}

#[sqlx::test]
async fn test_space_filter_matches_names_with_spaces(pool: PgPool) {
    common::insert_course(&pool, "s-1", "Intro Course", "2025-01-01", "2025-02-01").await;
    common::insert_course(&pool, "s-2", "Rust", "2025-01-01", "2025-02-01").await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    let courses = repo.get_all(CourseFilters::new(" "), 0, 10).await.unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, "s-1");
}
