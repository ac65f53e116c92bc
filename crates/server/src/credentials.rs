//! Credential store: password hashing and bearer token issuance.
//!
//! Passwords are hashed with Argon2id (fresh salt per call). Tokens are HS256 JWTs
//! carrying the account email as `sub` and an absolute `exp` 30 minutes after issue.
//! There is no revocation list; a token stays valid until it expires.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use utoipa::ToSchema;

/// Lifetime of an issued access token.
pub const TOKEN_TTL: Duration = Duration::minutes(30);

/// Signing algorithm for access tokens.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Hash a password using Argon2id.
///
/// Returns the PHC-formatted hash string suitable for storage.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// Malformed hashes verify as `false` rather than erroring.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token could not be encoded: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("token rejected: {0}")]
    Invalid(jsonwebtoken::errors::Error),
    #[error("token has no subject")]
    MissingSubject,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: i64,
}

/// Response body of a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessToken {
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
}

/// Issues and validates access tokens with a fixed shared secret.
#[derive(Clone)]
pub struct CredentialStore {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("algorithm", &TOKEN_ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl CredentialStore {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for `subject` expiring [`TOKEN_TTL`] from now.
    pub fn issue_token(&self, subject: &str) -> Result<AccessToken, TokenError> {
        self.issue_token_at(subject, OffsetDateTime::now_utc())
    }

    /// Issue a token as if it had been issued at `issued_at`.
    pub fn issue_token_at(
        &self,
        subject: &str,
        issued_at: OffsetDateTime,
    ) -> Result<AccessToken, TokenError> {
        let claims = TokenClaims {
            sub: Some(subject.to_string()),
            exp: (issued_at + TOKEN_TTL).unix_timestamp(),
        };
        let access_token = encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)?;
        Ok(AccessToken {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Check signature and expiry and return the subject (account email).
    pub fn validate_token(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(TokenError::Invalid)?;
        data.claims.sub.ok_or(TokenError::MissingSubject)
    }
}
