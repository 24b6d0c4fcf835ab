//! Activation token issuing and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult, VerificationError};

use super::config::ActivationTokenConfig;

/// Claims carried by an activation token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationClaims {
    /// Account id the token was minted for
    pub sub: String,
    /// Freshness marker binding the token to the credential state at mint
    /// time
    pub fm: String,
    /// Issuer
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,
    /// Expiry timestamp (seconds since epoch)
    pub exp: i64,
}

/// Signed token issuer for email activation links
///
/// Tokens bind `(account id, freshness marker)` where the marker is a
/// digest of the current password hash: rotating the password invalidates
/// every outstanding link without any revocation bookkeeping.
pub struct ActivationTokenService {
    config: ActivationTokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl ActivationTokenService {
    /// Create a new activation token service
    pub fn new(config: ActivationTokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Mint an activation token for the account
    pub fn make_token(&self, account: &Account) -> DomainResult<String> {
        let now = Utc::now();
        let claims = ActivationClaims {
            sub: account.id.to_string(),
            fm: Self::freshness_marker(account),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.validity_hours)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign activation token: {}", e),
            }
        })
    }

    /// Validate a token's signature, expiry and issuer
    ///
    /// The freshness marker is NOT checked here; the caller compares it
    /// against the referenced account's current state once that account
    /// has been loaded.
    pub fn verify_token(&self, token: &str) -> Result<ActivationClaims, VerificationError> {
        decode::<ActivationClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| VerificationError::InvalidOrExpiredToken)
    }

    /// Whether the claims were minted against the account's current
    /// credential state
    pub fn matches_freshness(&self, claims: &ActivationClaims, account: &Account) -> bool {
        claims.fm == Self::freshness_marker(account)
    }

    /// Build the activation link delivered to the user
    pub fn activation_link(&self, token: &str) -> String {
        format!(
            "{}/{}",
            self.config.activation_url_base.trim_end_matches('/'),
            token
        )
    }

    /// Digest of the account attribute whose change invalidates tokens
    fn freshness_marker(account: &Account) -> String {
        let mut hasher = Sha256::new();
        hasher.update(account.password_hash.as_bytes());
        hex::encode(hasher.finalize())
    }
}
