use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::{User, UserRole};

// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequestDto {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Returned by both signup and login. The user view never includes the
/// password hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_signup_dto_validation() {
        let dto = SignupRequestDto {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@test.com".to_string(),
            password: "password123".to_string(),
            role: UserRole::Teacher,
        };
        assert!(dto.validate().is_ok());

        let dto_short_password = SignupRequestDto {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@test.com".to_string(),
            password: "short".to_string(),
            role: UserRole::Teacher,
        };
        assert!(dto_short_password.validate().is_err());

        let dto_bad_email = SignupRequestDto {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
            role: UserRole::Student,
        };
        assert!(dto_bad_email.validate().is_err());
    }

    #[test]
    fn test_signup_dto_deserialize() {
        let json = r#"{"first_name":"Jane","last_name":"Smith","email":"jane@test.com","password":"password123","role":"teacher"}"#;
        let dto: SignupRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.first_name, "Jane");
        assert_eq!(dto.role, UserRole::Teacher);
    }

    #[test]
    fn test_login_request_validation() {
        let req = LoginRequest {
            email: "jane@test.com".to_string(),
            password: "x".to_string(),
        };
        assert!(req.validate().is_ok());

        let req_empty = LoginRequest {
            email: "jane@test.com".to_string(),
            password: "".to_string(),
        };
        assert!(req_empty.validate().is_err());
    }
}
