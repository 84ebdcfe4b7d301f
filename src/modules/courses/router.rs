use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{
    create_course, delete_course, get_all_courses, get_course_by_id, get_instructor_courses,
    update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).get(get_all_courses))
        .route("/course/{id}", get(get_course_by_id))
        .route("/instructor", get(get_instructor_courses))
        .route("/{id}", put(update_course).delete(delete_course))
}
