//! Token claims, verification errors, and the verifier contract
//!
//! Verification failures are deliberately discriminated: a malformed token,
//! an expired token, an unknown signing key, and a key-fetch failure are
//! different outcomes even though the HTTP layer maps them all to the same
//! 403 response. Collapsing them would make the difference between "client
//! sent garbage" and "our key fetch is broken" invisible in the logs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error type for token verification
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Token could not be decoded at all (bad structure, missing `kid`)
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// Token signature verified but the token has expired
    #[error("Token has expired")]
    Expired,

    /// No published signing key matches the token's key id
    #[error("No signing key found for kid {0}")]
    KeyNotFound(String),

    /// The signing key set could not be fetched or parsed
    #[error("Failed to fetch signing keys: {0}")]
    KeyFetch(String),

    /// Signature or claim validation failed
    #[error("Token validation failed: {0}")]
    Invalid(String),
}

/// Claims carried by a verified bearer token
///
/// Only the claims the authorization gate reads are modelled; everything
/// else in the token is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject - the provider's unique user id
    pub sub: String,

    /// Username as known to the identity provider
    #[serde(rename = "cognito:username", default)]
    pub username: Option<String>,

    /// Group names the user belongs to (absent claim = no groups)
    #[serde(rename = "cognito:groups", default)]
    pub groups: Vec<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Checks whether the claims include a group
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// Extracts the bearer token from a raw `Authorization` header value
///
/// Returns `None` for a missing header, a non-`Bearer` scheme, or an empty
/// remainder. All three count as "unauthenticated" rather than malformed:
/// the caller never presented a credential.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Contract for verifying a bearer token into claims
///
/// The production implementation is [`crate::auth::JwksVerifier`]; tests
/// substitute [`StaticVerifier`] so no network or key material is needed.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies a raw token string and returns its claims
    async fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// Verifier backed by a fixed token → claims table
///
/// Any token not in the table fails as invalid. Intended for tests and
/// local demos; it performs no cryptography.
#[derive(Debug, Default)]
pub struct StaticVerifier {
    tokens: HashMap<String, TokenClaims>,
}

impl StaticVerifier {
    /// Creates an empty verifier (every token is rejected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token with the given claims (builder style)
    pub fn with_token(mut self, token: impl Into<String>, claims: TokenClaims) -> Self {
        self.tokens.insert(token.into(), claims);
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| TokenError::Invalid("unknown token".to_string()))
    }
}
