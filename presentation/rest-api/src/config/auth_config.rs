use anyhow::Context;
use std::env;

/// Settings used to verify bearer tokens.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
}

impl AuthConfig {
    /// Load authentication settings from environment variables
    ///
    /// Environment variables:
    /// - JWT_SECRET: HMAC secret that signs access tokens (required)
    /// - JWT_ISSUER: Expected `iss` claim (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let issuer = env::var("JWT_ISSUER").ok().filter(|s| !s.trim().is_empty());

        Ok(Self { jwt_secret, issuer })
    }
}
