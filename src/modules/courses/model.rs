//! Course data models and DTOs.
//!
//! # Core Types
//!
//! - [`Course`] - Course entity as stored in the database
//! - [`CourseWithInstructor`] - Course with the owning instructor's public
//!   identity joined in (list and detail responses)
//!
//! # Request DTOs
//!
//! - [`CreateCourseDto`] - Create a new course (owner is always the caller)
//! - [`UpdateCourseDto`] - Replace a course's mutable fields
//!
//! The `price`/`is_free` pair is kept consistent by the write path: whenever
//! `is_free` is set, the persisted price is forced to 0 regardless of the
//! submitted value.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A course listed on the marketplace.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: CourseCategory,
    pub level: CourseLevel,
    pub duration: String,
    pub price: f64,
    pub is_free: bool,
    pub is_new_course: bool,
    pub instructor_id: Uuid,
    pub students: i32,
    pub rating: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The fixed set of course categories.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "course_category", rename_all = "snake_case")]
pub enum CourseCategory {
    WebDevelopment,
    Design,
    Marketing,
    Business,
    Programming,
    Cybersecurity,
    Other,
}

/// Difficulty level of a course.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "course_level", rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Public identity of a course's instructor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct InstructorInfo {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Course with the owning instructor's identity joined in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CourseWithInstructor {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: CourseCategory,
    pub level: CourseLevel,
    pub duration: String,
    pub price: f64,
    pub is_free: bool,
    pub is_new_course: bool,
    pub instructor: InstructorInfo,
    pub students: i32,
    pub rating: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub image: String,
    pub category: CourseCategory,
    pub level: CourseLevel,
    #[validate(length(min = 1))]
    pub duration: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default = "default_is_new_course")]
    pub is_new_course: bool,
}

fn default_is_new_course() -> bool {
    true
}

/// DTO for replacing a course's mutable fields.
///
/// Derived counters (`students`, `rating`) and ownership are not updatable
/// through this DTO.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub image: String,
    pub category: CourseCategory,
    pub level: CourseLevel,
    #[validate(length(min = 1))]
    pub duration: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default = "default_is_new_course")]
    pub is_new_course: bool,
}
