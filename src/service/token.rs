//! Stateless bearer token issuing and verification.
//!
//! Tokens are two base64url segments joined by a dot: the serialized claims
//! and an HMAC-SHA256 tag over the claims bytes. Verification recomputes the
//! tag with the shared secret before the claims are even parsed, so a
//! tampered or truncated token is rejected without touching the database.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::{auth::AuthError, AppError};

type HmacSha256 = Hmac<Sha256>;

/// Claims carried inside a bearer token.
#[derive(Serialize, Deserialize)]
struct TokenClaims {
    /// Id of the user the token authenticates.
    sub: i32,
    /// Expiry as a unix timestamp in seconds.
    exp: i64,
}

/// Issues and verifies signed bearer tokens.
///
/// Cheap to clone; the secret is shared behind an `Arc` so the service can
/// live in the application state passed to every handler.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<Vec<u8>>,
    ttl: Duration,
}

impl TokenService {
    /// Creates a new TokenService.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret, any length
    /// - `ttl_hours` - Token lifetime in hours
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            secret: Arc::new(secret.to_vec()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC accepts keys of any length, so this cannot fail.
        HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any length")
    }

    /// Issues a token for the given user id, valid for the configured TTL.
    ///
    /// # Returns
    /// - `Ok(String)` - Compact token of the form `claims.signature`
    /// - `Err(AppError::InternalError)` - Claims serialization failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let claims = TokenClaims {
            sub: user_id,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|err| AppError::InternalError(format!("Token serialization failed: {err}")))?;

        let mut mac = self.mac();
        mac.update(&payload);
        let tag = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(tag)
        ))
    }

    /// Verifies a token and returns the user id it authenticates.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the authenticated user
    /// - `Err(AuthError::InvalidToken)` - Malformed token or bad signature
    /// - `Err(AuthError::TokenExpired)` - Valid signature, past expiry
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let (payload_b64, tag_b64) = token.split_once('.').ok_or(AuthError::InvalidToken)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::InvalidToken)?;
        let tag = URL_SAFE_NO_PAD
            .decode(tag_b64)
            .map_err(|_| AuthError::InvalidToken)?;

        let mut mac = self.mac();
        mac.update(&payload);
        mac.verify_slice(&tag).map_err(|_| AuthError::InvalidToken)?;

        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::InvalidToken)?;

        if claims.exp < Utc::now().timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims.sub)
    }
}
