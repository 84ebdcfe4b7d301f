use learnhub::config::jwt::JwtConfig;
use learnhub::modules::users::model::UserRole;
use learnhub::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 86400,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();
    let email = "test@example.com";

    let result = create_access_token(user_id, email, UserRole::Student, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_create_access_token_all_roles() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();
    let email = "test@example.com";

    let roles = vec![UserRole::Student, UserRole::Teacher, UserRole::Admin];

    for role in roles {
        let result = create_access_token(user_id, email, role, &jwt_config);
        assert!(result.is_ok());
    }
}

#[test]
fn test_verify_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();
    let email = "test@example.com";

    let token = create_access_token(user_id, email, UserRole::Student, &jwt_config).unwrap();
    let result = verify_token(&token, &jwt_config);

    assert!(result.is_ok());
    let claims = result.unwrap();
    assert_eq!(claims.email, email);
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, UserRole::Student);
}

#[test]
fn test_token_expiry_window() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token =
        create_access_token(user_id, "test@example.com", UserRole::Teacher, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.exp - claims.iat, 86400);
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();
    let invalid_token = "invalid.token.here";

    let result = verify_token(invalid_token, &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token =
        create_access_token(user_id, "test@example.com", UserRole::Student, &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 86400,
    };

    let result = verify_token(&token, &wrong_jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_empty() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("", &jwt_config);

    assert!(result.is_err());
}
