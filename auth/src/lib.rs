//! Session token library
//!
//! Provides the signed, expiring session tokens used by the user directory:
//! - Token lifetime parsing (`"1h"`, `"30 minutes"`, ...)
//! - JWT (HS256) encoding and validation
//! - An authenticator binding the signing secret and lifetime together
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, JwtError, TokenTtl};
//!
//! let ttl = TokenTtl::parse("1h").unwrap();
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", ttl);
//!
//! let token = auth.issue_token(1, "a@x.com").unwrap();
//! assert_eq!(token.matches('.').count(), 2);
//!
//! let claims = auth.verify_token(&token).unwrap();
//! assert_eq!(claims.user_id, 1);
//! assert_eq!(claims.email, "a@x.com");
//!
//! let other = Authenticator::new(b"a_different_secret_key_of_32_bytes", ttl);
//! assert_eq!(other.verify_token(&token), Err(JwtError::InvalidSignature));
//! ```

pub mod authenticator;
pub mod jwt;

pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use jwt::TokenTtl;
pub use jwt::TtlError;
