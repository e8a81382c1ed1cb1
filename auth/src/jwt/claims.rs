use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;
use super::ttl::TokenTtl;

/// Session token payload.
///
/// Field names on the wire follow the login token format: `userId`, `email`,
/// plus the registered `iat` and `exp` claims (Unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Identifier of the user the token was minted for
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Email the user logged in with
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a user, issued at `issued_at` and valid for `ttl`.
    ///
    /// # Errors
    /// * `InvalidClaims` - Identifier is not positive or email is blank
    pub fn new(
        user_id: i64,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: TokenTtl,
    ) -> Result<Self, JwtError> {
        let email = email.into();

        if user_id <= 0 {
            return Err(JwtError::InvalidClaims(format!(
                "user id must be positive, got {}",
                user_id
            )));
        }
        if email.trim().is_empty() {
            return Err(JwtError::InvalidClaims("email must not be empty".to_string()));
        }

        let iat = issued_at.timestamp();
        let exp = (issued_at + ttl.as_duration()).timestamp();

        Ok(Self {
            user_id,
            email,
            iat,
            exp,
        })
    }

    /// Check if token is expired.
    ///
    /// A token is valid only while `current_timestamp` is strictly before `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
