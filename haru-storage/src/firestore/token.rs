//! OAuth2 access-token minting and caching
//!
//! Implements the JWT-bearer grant: sign a short-lived RS256 assertion with
//! the service-account key, exchange it at the token endpoint, cache the
//! bearer token until shortly before expiry. Tokens are minted lazily on
//! first use; a malformed key surfaces as `StoreError::Credentials`, a
//! failed exchange over the network as `StoreError::Unavailable`.

use chrono::{DateTime, Duration, Utc};
use haru_core::StoreError;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::credentials::ServiceAccountKey;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const EXPIRY_LEEWAY_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_LEEWAY_SECS) < self.expires_at
    }
}

/// Lazily-minting, caching token source.
///
/// Concurrent first uses may both mint; the cache is last-write-wins, which
/// is harmless since every minted token is valid.
pub(crate) struct TokenProvider {
    client: Client,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            cached: RwLock::new(None),
        }
    }

    /// A bearer token valid for at least `EXPIRY_LEEWAY_SECS` more seconds.
    pub(crate) async fn token(&self, key: &ServiceAccountKey) -> Result<String, StoreError> {
        let now = Utc::now();

        if let Some(cached) = self.cached.read().await.as_ref() {
            if cached.is_fresh(now) {
                return Ok(cached.token.clone());
            }
        }

        let minted = self.mint(key, now).await?;
        let token = minted.token.clone();
        *self.cached.write().await = Some(minted);
        Ok(token)
    }

    async fn mint(
        &self,
        key: &ServiceAccountKey,
        now: DateTime<Utc>,
    ) -> Result<CachedToken, StoreError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key_pem().as_bytes()).map_err(
            |e| StoreError::Credentials {
                message: format!("invalid service-account private key: {}", e),
            },
        )?;

        let claims = Claims {
            iss: key.client_email(),
            scope: TOKEN_SCOPE,
            aud: key.token_uri(),
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key).map_err(
            |e| StoreError::Credentials {
                message: format!("failed to sign token assertion: {}", e),
            },
        )?;

        let response = self
            .client
            .post(key.token_uri())
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable {
                message: format!("token exchange failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = format!("token exchange rejected: {} {}", status.as_u16(), body);
            return Err(if status.is_client_error() {
                StoreError::Credentials { message }
            } else {
                StoreError::Unavailable { message }
            });
        }

        let parsed: TokenResponse =
            response.json().await.map_err(|e| StoreError::Unavailable {
                message: format!("malformed token response: {}", e),
            })?;

        tracing::debug!(expires_in = parsed.expires_in, "minted store access token");

        Ok(CachedToken {
            token: parsed.access_token,
            expires_at: now + Duration::seconds(parsed.expires_in),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_token_freshness_window() {
        let now = Utc::now();
        let token = CachedToken {
            token: "t".to_string(),
            expires_at: now + Duration::seconds(3600),
        };
        assert!(token.is_fresh(now));
        // Inside the leeway window the token counts as expired.
        assert!(!token.is_fresh(now + Duration::seconds(3600 - EXPIRY_LEEWAY_SECS)));
        assert!(!token.is_fresh(now + Duration::seconds(3601)));
    }

    #[test]
    fn test_placeholder_key_is_rejected_as_credentials_error() {
        // The for_tests key has no real RSA material; signing must fail with
        // a credentials error rather than anything retryable.
        let key = ServiceAccountKey::for_tests("p", "e@p.iam");
        let err = EncodingKey::from_rsa_pem(key.private_key_pem().as_bytes());
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn test_token_with_bad_key_surfaces_credentials_error() {
        let provider = TokenProvider::new(Client::new());
        let key = ServiceAccountKey::for_tests("p", "e@p.iam");
        let err = provider.token(&key).await.unwrap_err();
        assert!(matches!(err, StoreError::Credentials { .. }));
    }
}
