use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem::http::StatusCode;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::{Caller, Role, UserId};

use crate::config::auth_config::AuthConfig;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.unauthorized")]
    Unauthorized,
    #[error("auth.forbidden")]
    Forbidden,
}

impl poem::error::ResponseError for AuthError {
    fn status(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// Resolves the caller behind an HS256 access token.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Unknown role names in the token are ignored rather than rejected.
    pub fn verify(&self, token: &str) -> Result<Caller, String> {
        let token_data = decode::<AccessClaims>(token, &self.key, &self.validation)
            .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

        let claims = token_data.claims;
        if claims.sub.trim().is_empty() {
            return Err("auth.missing_subject".to_string());
        }

        let roles = claims
            .roles
            .iter()
            .filter_map(|role| role.parse::<Role>().ok())
            .collect();

        Ok(Caller::new(UserId::new(claims.sub), roles))
    }
}

/// Capability check run before any handler logic.
pub fn authorize(caller: &Caller, required: Role) -> Result<(), AuthError> {
    if caller.has_role(required) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// Bearer token of a caller holding the `user` role
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "user_bearer_checker")]
pub struct UserBearer(pub Caller);

async fn user_bearer_checker(req: &Request, bearer: Bearer) -> poem::Result<Caller> {
    let verifier = req.data::<Arc<JwtVerifier>>().ok_or_else(|| {
        tracing::error!("JWT verifier is not registered on the route");
        poem::Error::from_status(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    let caller = verifier.verify(&bearer.token).map_err(|e| {
        tracing::warn!("Bearer authentication failed: {e}");
        AuthError::Unauthorized
    })?;

    authorize(&caller, Role::User).inspect_err(|_| {
        tracing::warn!("Caller {} lacks role {}", caller.user_id, Role::User);
    })?;

    Ok(caller)
}
