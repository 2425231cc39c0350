//! Session token verification
//!
//! The session provider is an external collaborator; what reaches this
//! service is a signed bearer token carrying the provider's subject and
//! basic profile claims. This module verifies that token with the shared
//! secret using the `jsonwebtoken` crate. Issuing is only exposed for tests
//! and local tooling.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity provider subject (external identity reference)
    pub sub: String,
    /// Display name claim
    pub name: String,
    /// Avatar URL claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies (and, for tests, issues) session tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    /// Create a new session service with the shared secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Verify a bearer token and return its claims
    ///
    /// # Errors
    /// Returns `AppError::TokenExpired` for expired tokens and
    /// `AppError::InvalidToken` for anything else that fails validation.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        Ok(data.claims)
    }

    /// Issue a session token (tests and local tooling only)
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(
        &self,
        subject: &str,
        name: &str,
        avatar: Option<String>,
        ttl_seconds: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: subject.to_string(),
            name: name.to_string(),
            avatar,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AppError::internal)
    }
}
