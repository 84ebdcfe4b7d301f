//! Authorization policy for mutating course operations.
//!
//! Every mutating course endpoint routes its ownership decision through
//! [`authorize_course_action`] instead of re-implementing the check inline.
//! Denials surface to callers as 404 so a foreign caller cannot distinguish
//! a record that does not exist from one they do not own.

use uuid::Uuid;

use crate::modules::users::model::UserRole;

/// Mutating actions on a course that require an ownership decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAction {
    Update,
    Delete,
}

/// Decide whether `caller_id` with `role` may perform `action` on a course
/// owned by `owner_id`.
///
/// Admins may delete any course, but have no update override; updates are
/// owner-only for every role.
pub fn authorize_course_action(
    role: UserRole,
    caller_id: Uuid,
    owner_id: Uuid,
    action: CourseAction,
) -> bool {
    let is_owner = caller_id == owner_id;

    match (role, action) {
        (UserRole::Admin, CourseAction::Delete) => true,
        (UserRole::Admin, CourseAction::Update) => is_owner,
        (UserRole::Teacher, _) => is_owner,
        (UserRole::Student, _) => is_owner,
    }
}
