#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use course_service::domain::entities::{Course, CoursePatch, NewCourse};
use course_service::domain::repositories::{
    CourseFilters, CourseRepository, RepositoryError, RepositoryResult,
};
use course_service::infrastructure::persistence::PgCourseRepository;
use course_service::state::AppState;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Course store kept in memory, newest first.
///
/// Mirrors the PostgreSQL repository's ordering and filtering so handler tests
/// run without a database.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<Vec<Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a course whose `created_at` is `age_secs` in the past.
    pub fn seed(&self, id: &str, name: &str, start: &str, end: &str, age_secs: i64) {
        let created_at = Utc::now() - Duration::seconds(age_secs);
        let course = Course::new(
            id.to_string(),
            name.to_string(),
            date(start),
            date(end),
            created_at,
            created_at,
        );

        let mut courses = self.courses.lock().unwrap();
        courses.push(course);
        courses.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
    }

    pub fn snapshot(&self, id: &str) -> Option<Course> {
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.courses.lock().unwrap().len()
    }

    fn matches(course: &Course, filters: &CourseFilters) -> bool {
        let needle = filters.name.to_lowercase();
        needle.is_empty() || course.name.to_lowercase().contains(&needle)
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, new_course: NewCourse) -> RepositoryResult<Course> {
        let now = Utc::now();
        let course = Course::new(
            new_course.id,
            new_course.name,
            new_course.start_date,
            new_course.end_date,
            now,
            now,
        );
        self.courses.lock().unwrap().insert(0, course.clone());
        Ok(course)
    }

    async fn get(&self, id: &str) -> RepositoryResult<Course> {
        self.snapshot(id)
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn get_all(
        &self,
        filters: CourseFilters,
        offset: i64,
        limit: i64,
    ) -> RepositoryResult<Vec<Course>> {
        let courses = self.courses.lock().unwrap();
        Ok(courses
            .iter()
            .filter(|c| Self::matches(c, &filters))
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filters: CourseFilters) -> RepositoryResult<i64> {
        let courses = self.courses.lock().unwrap();
        Ok(courses.iter().filter(|c| Self::matches(c, &filters)).count() as i64)
    }

    async fn update(&self, id: &str, patch: CoursePatch) -> RepositoryResult<()> {
        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found(id))?;

        if patch.is_empty() {
            return Ok(());
        }
        if let Some(name) = patch.name {
            course.name = name;
        }
        if let Some(start) = patch.start_date {
            course.start_date = start;
        }
        if let Some(end) = patch.end_date {
            course.end_date = end;
        }
        course.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut courses = self.courses.lock().unwrap();
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return Err(RepositoryError::not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

/// Repository whose every call fails as if the pool were exhausted.
pub struct FailingCourseRepository;

#[async_trait]
impl CourseRepository for FailingCourseRepository {
    async fn create(&self, _new_course: NewCourse) -> RepositoryResult<Course> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _id: &str) -> RepositoryResult<Course> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_all(
        &self,
        _filters: CourseFilters,
        _offset: i64,
        _limit: i64,
    ) -> RepositoryResult<Vec<Course>> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn count(&self, _filters: CourseFilters) -> RepositoryResult<i64> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: &str, _patch: CoursePatch) -> RepositoryResult<()> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: &str) -> RepositoryResult<()> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn create_test_state(
    default_page_limit: &str,
) -> (AppState<InMemoryCourseRepository>, Arc<InMemoryCourseRepository>) {
    let repository = Arc::new(InMemoryCourseRepository::new());
    let state = AppState::new(repository.clone(), default_page_limit);
    (state, repository)
}

pub fn create_failing_state() -> AppState<FailingCourseRepository> {
    AppState::new(Arc::new(FailingCourseRepository), "10")
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgCourseRepository::new(Arc::new(pool))), "10")
}

pub async fn insert_course(pool: &PgPool, id: &str, name: &str, start: &str, end: &str) {
    sqlx::query(
        "INSERT INTO courses (id, name, start_date, end_date) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(name)
    .bind(date(start))
    .bind(date(end))
    .execute(pool)
    .await
    .unwrap();
}
