use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, SignupRequestDto};
use crate::modules::courses::model::{
    Course, CourseCategory, CourseLevel, CourseWithInstructor, CreateCourseDto, InstructorInfo,
    UpdateCourseDto,
};
use crate::modules::users::model::{User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_all_courses,
        crate::modules::courses::controller::get_course_by_id,
        crate::modules::courses::controller::get_instructor_courses,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            User,
            UserRole,
            SignupRequestDto,
            LoginRequest,
            AuthResponse,
            Course,
            CourseCategory,
            CourseLevel,
            CourseWithInstructor,
            InstructorInfo,
            CreateCourseDto,
            UpdateCourseDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Courses", description = "Course marketplace CRUD")
    ),
    info(
        title = "Learnhub API",
        description = "Course marketplace REST API with JWT authentication",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
