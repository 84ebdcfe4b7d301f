use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginRequest, SignupRequestDto};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn signup(
        db: &PgPool,
        dto: SignupRequestDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (first_name, last_name, email, password, role)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, first_name, last_name, email, role, created_at, updated_at"#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(dto.role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // Concurrent signup can still race past the pre-check.
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!("Email already registered"));
            }
            AppError::from(e)
        })?;

        let access_token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        Ok(AuthResponse { access_token, user })
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            first_name: String,
            last_name: String,
            email: String,
            password: String,
            role: UserRole,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
        }

        // Unknown email and wrong password produce the same response.
        let row = sqlx::query_as::<_, UserWithPassword>(
            r#"SELECT id, first_name, last_name, email, password, role, created_at, updated_at
               FROM users WHERE email = $1"#,
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid email or password")))?;

        let is_valid = verify_password(&dto.password, &row.password)?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        let access_token = create_access_token(row.id, &row.email, row.role, jwt_config)?;

        let user = User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        Ok(AuthResponse { access_token, user })
    }
}
