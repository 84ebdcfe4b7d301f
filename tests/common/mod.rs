use learnhub::config::cors::CorsConfig;
use learnhub::config::jwt::JwtConfig;
use learnhub::modules::users::model::UserRole;
use learnhub::router::init_router;
use learnhub::state::AppState;
use learnhub::utils::jwt::create_access_token;
use learnhub::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

/// Build the full router against the given pool with a fixed test secret,
/// independent of the process environment.
pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[allow(dead_code)]
impl TestUser {
    pub fn token(&self) -> String {
        create_access_token(self.id, &self.email, self.role, &test_jwt_config()).unwrap()
    }
}

/// Insert a user with a bcrypt-hashed password and the given role.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, role: UserRole) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let (id, email): (Uuid, String) = sqlx::query_as(
        r#"
        INSERT INTO users (first_name, last_name, email, password, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email
        "#,
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email,
        password: password.to_string(),
        role,
    }
}

#[allow(dead_code)]
pub struct TestCourse {
    pub id: Uuid,
    pub title: String,
    pub instructor_id: Uuid,
}

/// Insert a course owned by `instructor_id`.
#[allow(dead_code)]
pub async fn create_test_course(
    pool: &PgPool,
    instructor_id: Uuid,
    title: &str,
    price: f64,
    is_free: bool,
) -> TestCourse {
    let (id, title): (Uuid, String) = sqlx::query_as(
        r#"
        INSERT INTO courses
            (title, description, image, category, level, duration, price, is_free, instructor_id)
        VALUES ($1, $2, $3, 'programming', 'beginner', $4, $5, $6, $7)
        RETURNING id, title
        "#,
    )
    .bind(title)
    .bind("Test course description")
    .bind("https://cdn.example.com/test.png")
    .bind("4 weeks")
    .bind(price)
    .bind(is_free)
    .bind(instructor_id)
    .fetch_one(pool)
    .await
    .unwrap();

    TestCourse {
        id,
        title,
        instructor_id,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
