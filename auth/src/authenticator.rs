use chrono::DateTime;
use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;
use crate::jwt::TokenTtl;

/// Session token coordinator.
///
/// Binds the process-wide signing secret and token lifetime together so
/// callers only deal in user identities. Built once at startup and shared.
pub struct Authenticator {
    jwt_handler: JwtHandler,
    ttl: TokenTtl,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `ttl` - Lifetime of every issued token
    pub fn new(jwt_secret: &[u8], ttl: TokenTtl) -> Self {
        Self {
            jwt_handler: JwtHandler::new(jwt_secret),
            ttl,
        }
    }

    /// Lifetime applied to issued tokens.
    pub fn ttl(&self) -> TokenTtl {
        self.ttl
    }

    /// Issue a session token for a user, valid from now.
    ///
    /// # Errors
    /// * `InvalidClaims` - Identifier is not positive or email is blank
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, user_id: i64, email: &str) -> Result<String, JwtError> {
        self.issue_token_at(user_id, email, Utc::now())
    }

    /// Issue a session token as if minted at `issued_at`.
    pub fn issue_token_at(
        &self,
        user_id: i64,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = SessionClaims::new(user_id, email, issued_at, self.ttl)?;
        self.jwt_handler.encode(&claims)
    }

    /// Validate a session token and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `InvalidSignature` - Token was not signed with this secret
    /// * `Expired` - Token lifetime has elapsed
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, JwtError> {
        let claims: SessionClaims = self.jwt_handler.decode(token)?;

        // jsonwebtoken still accepts the exp second itself
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}
