//! Bearer token verification and group authorization
//!
//! Both authenticated endpoints gate requests the same way: strip the
//! `Bearer ` prefix from the `Authorization` header, verify the token
//! against the user pool's published signing keys, then require the
//! `Admins` group claim. The pieces live here so the API layer and the
//! tests share one implementation.

pub mod authorization;
pub mod jwks;
pub mod token;

pub use authorization::{require_group, AuthzError, ADMIN_GROUP};
pub use jwks::JwksVerifier;
pub use token::{extract_bearer, StaticVerifier, TokenClaims, TokenError, TokenVerifier};
