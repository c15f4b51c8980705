//! Bearer-token validation and role bootstrap.
//!
//! Credential issuance (login, passwords, token minting) belongs to an
//! external identity provider; this service only verifies presented HS256
//! tokens against the configured issuer, audience, and signing key, and
//! resolves the subject claim to a user id for scoping queries.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::AppState;
use crate::config::Config;
use crate::error::AppError;

/// Role name carried by administrative tokens.
pub const ADMIN_ROLE: &str = "Admin";
/// Role name carried by ordinary user tokens.
pub const USER_ROLE: &str = "User";

/// Claims expected in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the caller's catalog user id.
    pub sub: i64,
    /// Role name, either `"Admin"` or `"User"`.
    pub role: String,
    /// Token issuer; must match the configured value.
    pub iss: String,
    /// Token audience; must match the configured value.
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks the signature, expiration, issuer, and audience. Callers map any
/// failure to a uniform 401; the distinction between a bad signature and a
/// stale expiry is deliberately not surfaced to clients.
pub fn validate_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_audience(&[&config.jwt_audience]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_key.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication; rejection is a 401 with no claim detail.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's catalog user id (from `claims.sub`).
    pub user_id: i64,
    /// The caller's role name.
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = validate_token(token, &state.config).map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            AppError::Unauthorized
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

/// Extractor that additionally requires the `Admin` role.
///
/// Token validation runs first (401 on failure); the role check only ever
/// rejects an already-authenticated caller (403).
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

#[axum::async_trait]
impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::Forbidden);
        }
        Ok(RequireAdmin(user))
    }
}

/// Ensure the two fixed roles exist in the identity store.
///
/// The identity provider owns this table; we only guarantee the baseline
/// rows are present before the first request is served.
pub async fn bootstrap_roles(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("CREATE TABLE IF NOT EXISTS roles (name TEXT PRIMARY KEY)")
        .execute(pool)
        .await?;

    for role in [ADMIN_ROLE, USER_ROLE] {
        let result = sqlx::query("INSERT OR IGNORE INTO roles (name) VALUES (?)")
            .bind(role)
            .execute(pool)
            .await?;
        if result.rows_affected() > 0 {
            tracing::info!(role, "seeded missing role");
        }
    }

    Ok(())
}
