pub mod claims;
pub mod errors;
pub mod handler;
pub mod ttl;

pub use claims::SessionClaims;
pub use errors::JwtError;
pub use errors::TtlError;
pub use handler::JwtHandler;
pub use ttl::TokenTtl;
