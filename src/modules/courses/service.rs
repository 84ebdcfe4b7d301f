use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseCategory, CourseLevel, CourseWithInstructor, CreateCourseDto, InstructorInfo,
    UpdateCourseDto,
};
use crate::modules::users::model::UserRole;
use crate::policy::{CourseAction, authorize_course_action};
use crate::utils::errors::AppError;

/// Flat row for course + instructor join queries.
#[derive(sqlx::FromRow)]
struct CourseInstructorRow {
    id: Uuid,
    title: String,
    description: String,
    image: String,
    category: CourseCategory,
    level: CourseLevel,
    duration: String,
    price: f64,
    is_free: bool,
    is_new_course: bool,
    students: i32,
    rating: f64,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    instructor_id: Uuid,
    instructor_first_name: String,
    instructor_last_name: String,
    instructor_email: String,
}

impl From<CourseInstructorRow> for CourseWithInstructor {
    fn from(row: CourseInstructorRow) -> Self {
        CourseWithInstructor {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image,
            category: row.category,
            level: row.level,
            duration: row.duration,
            price: row.price,
            is_free: row.is_free,
            is_new_course: row.is_new_course,
            instructor: InstructorInfo {
                id: row.instructor_id,
                first_name: row.instructor_first_name,
                last_name: row.instructor_last_name,
                email: row.instructor_email,
            },
            students: row.students,
            rating: row.rating,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COURSE_WITH_INSTRUCTOR_SELECT: &str = r#"SELECT
    c.id,
    c.title,
    c.description,
    c.image,
    c.category,
    c.level,
    c.duration,
    c.price,
    c.is_free,
    c.is_new_course,
    c.students,
    c.rating,
    c.created_at,
    c.updated_at,
    u.id AS instructor_id,
    u.first_name AS instructor_first_name,
    u.last_name AS instructor_last_name,
    u.email AS instructor_email
   FROM courses c
   INNER JOIN users u ON u.id = c.instructor_id"#;

pub struct CourseService;

impl CourseService {
    /// Creates a course owned by `instructor_id`. A free course is persisted
    /// with price 0 no matter what price was submitted.
    #[instrument(skip(db, dto))]
    pub async fn create_course(
        db: &PgPool,
        instructor_id: Uuid,
        dto: CreateCourseDto,
    ) -> Result<Course, AppError> {
        let price = if dto.is_free { 0.0 } else { dto.price };

        let course = sqlx::query_as::<_, Course>(
            r#"INSERT INTO courses
               (title, description, image, category, level, duration, price, is_free, is_new_course, instructor_id)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
               RETURNING id, title, description, image, category, level, duration, price,
                         is_free, is_new_course, instructor_id, students, rating,
                         created_at, updated_at"#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.image)
        .bind(dto.category)
        .bind(dto.level)
        .bind(&dto.duration)
        .bind(price)
        .bind(dto.is_free)
        .bind(dto.is_new_course)
        .bind(instructor_id)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_all_courses(db: &PgPool) -> Result<Vec<CourseWithInstructor>, AppError> {
        let query = format!("{} ORDER BY c.created_at DESC", COURSE_WITH_INSTRUCTOR_SELECT);

        let rows = sqlx::query_as::<_, CourseInstructorRow>(&query)
            .fetch_all(db)
            .await?;

        Ok(rows.into_iter().map(CourseWithInstructor::from).collect())
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(
        db: &PgPool,
        course_id: Uuid,
    ) -> Result<CourseWithInstructor, AppError> {
        let query = format!("{} WHERE c.id = $1", COURSE_WITH_INSTRUCTOR_SELECT);

        let row = sqlx::query_as::<_, CourseInstructorRow>(&query)
            .bind(course_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(row.into())
    }

    #[instrument(skip(db))]
    pub async fn get_courses_by_instructor(
        db: &PgPool,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"SELECT id, title, description, image, category, level, duration, price,
                      is_free, is_new_course, instructor_id, students, rating,
                      created_at, updated_at
               FROM courses
               WHERE instructor_id = $1
               ORDER BY created_at DESC"#,
        )
        .bind(instructor_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    /// Replaces the mutable fields of a course.
    ///
    /// Returns 404 when the course does not exist or when the policy denies
    /// the caller, so foreign callers cannot distinguish the two.
    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        course_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let owner_id = Self::get_course_owner(db, course_id).await?;

        if !authorize_course_action(caller_role, caller_id, owner_id, CourseAction::Update) {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        let price = if dto.is_free { 0.0 } else { dto.price };

        let course = sqlx::query_as::<_, Course>(
            r#"UPDATE courses
               SET title = $2, description = $3, image = $4, category = $5, level = $6,
                   duration = $7, price = $8, is_free = $9, is_new_course = $10,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING id, title, description, image, category, level, duration, price,
                         is_free, is_new_course, instructor_id, students, rating,
                         created_at, updated_at"#,
        )
        .bind(course_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.image)
        .bind(dto.category)
        .bind(dto.level)
        .bind(&dto.duration)
        .bind(price)
        .bind(dto.is_free)
        .bind(dto.is_new_course)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    /// Deletes a course. Owners may delete their own courses; admins may
    /// delete any course. Denials surface as 404.
    #[instrument(skip(db))]
    pub async fn delete_course(
        db: &PgPool,
        course_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> Result<(), AppError> {
        let owner_id = Self::get_course_owner(db, course_id).await?;

        if !authorize_course_action(caller_role, caller_id, owner_id, CourseAction::Delete) {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }

    async fn get_course_owner(db: &PgPool, course_id: Uuid) -> Result<Uuid, AppError> {
        let owner: Option<(Uuid,)> =
            sqlx::query_as("SELECT instructor_id FROM courses WHERE id = $1")
                .bind(course_id)
                .fetch_optional(db)
                .await?;

        owner
            .map(|(id,)| id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }
}
