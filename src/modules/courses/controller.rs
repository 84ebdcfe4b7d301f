use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::courses::model::{
    Course, CourseWithInstructor, CreateCourseDto, UpdateCourseDto,
};
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a course owned by the caller
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created successfully", body = Course),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let instructor_id = auth_user.user_id()?;

    let course = CourseService::create_course(&state.db, instructor_id, dto).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// List all courses, newest first
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses with instructor details", body = [CourseWithInstructor])
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_all_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithInstructor>>, AppError> {
    let courses = CourseService::get_all_courses(&state.db).await?;

    Ok(Json(courses))
}

/// Fetch a single course by ID
#[utoipa::path(
    get,
    path = "/api/courses/course/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details with instructor", body = CourseWithInstructor),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseWithInstructor>, AppError> {
    let course = CourseService::get_course_by_id(&state.db, id).await?;

    Ok(Json(course))
}

/// List the caller's own courses, newest first
#[utoipa::path(
    get,
    path = "/api/courses/instructor",
    responses(
        (status = 200, description = "Caller's courses", body = [Course]),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_instructor_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let instructor_id = auth_user.user_id()?;

    let courses = CourseService::get_courses_by_instructor(&state.db, instructor_id).await?;

    Ok(Json(courses))
}

/// Update a caller-owned course
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated successfully", body = Course),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found or not owned by caller"),
        (status = 422, description = "Validation error")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let caller_id = auth_user.user_id()?;

    let course =
        CourseService::update_course(&state.db, id, caller_id, auth_user.role(), dto).await?;

    Ok(Json(course))
}

/// Delete a course (own, or any if admin)
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found or outside caller's scope")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let caller_id = auth_user.user_id()?;

    CourseService::delete_course(&state.db, id, caller_id, auth_user.role()).await?;

    Ok(StatusCode::NO_CONTENT)
}
