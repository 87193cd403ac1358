//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::{
    CourseFilters, CourseRepository, RepositoryError, RepositoryResult,
};

const COURSE_COLUMNS: &str = "id, name, start_date, end_date, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: String,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course::new(
            r.id,
            r.name,
            r.start_date,
            r.end_date,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for courses.
///
/// Filter and update statements are assembled with [`QueryBuilder`] so that
/// only the requested predicates and columns end up in the SQL.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Appends the `WHERE` clause for `filters`, if any.
fn apply_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &CourseFilters) {
    if let Some(pattern) = filters.name_pattern() {
        qb.push(" WHERE LOWER(name) LIKE ").push_bind(pattern);
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, new_course: NewCourse) -> RepositoryResult<Course> {
        let row = sqlx::query_as::<_, CourseRow>(&format!(
            r#"
            INSERT INTO courses (id, name, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(&new_course.id)
        .bind(&new_course.name)
        .bind(new_course.start_date)
        .bind(new_course.end_date)
        .fetch_one(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to insert course"))?;

        tracing::info!(course_id = %row.id, "course created");
        Ok(row.into())
    }

    async fn get(&self, id: &str) -> RepositoryResult<Course> {
        let row = sqlx::query_as::<_, CourseRow>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .inspect_err(|e| tracing::error!(error = %e, course_id = %id, "failed to fetch course"))?;

        row.map(Course::from)
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn get_all(
        &self,
        filters: CourseFilters,
        offset: i64,
        limit: i64,
    ) -> RepositoryResult<Vec<Course>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {COURSE_COLUMNS} FROM courses"));
        apply_filters(&mut qb, &filters);
        qb.push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = qb
            .build_query_as::<CourseRow>()
            .fetch_all(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to list courses"))?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn count(&self, filters: CourseFilters) -> RepositoryResult<i64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM courses");
        apply_filters(&mut qb, &filters);

        let count = qb
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to count courses"))?;

        Ok(count)
    }

    async fn update(&self, id: &str, patch: CoursePatch) -> RepositoryResult<()> {
        if patch.is_empty() {
            // Nothing to write, but a missing row must still surface as not-found.
            return self.get(id).await.map(|_| ());
        }

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE courses SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(name) = patch.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(start_date) = patch.start_date {
                set.push("start_date = ").push_bind_unseparated(start_date);
            }
            if let Some(end_date) = patch.end_date {
                set.push("end_date = ").push_bind_unseparated(end_date);
            }
            set.push("updated_at = NOW()");
        }
        qb.push(" WHERE id = ").push_bind(id.to_string());

        let result = qb
            .build()
            .execute(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, course_id = %id, "failed to update course"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(id));
        }

        tracing::debug!(course_id = %id, "course updated");
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, course_id = %id, "failed to delete course"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(id));
        }

        tracing::debug!(course_id = %id, "course deleted");
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
