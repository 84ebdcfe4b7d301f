use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Loads JWT configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set. There is deliberately no fallback
    /// value; startup must fail rather than run with a guessable secret.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        }
    }
}
