//! HS256 session tokens.

use super::IdentityError;
use crate::config::IdentityConfig;
use crate::model::{CurrentSeller, SellerId};
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Seller id.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

/// A freshly issued token and the moment it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TokenService {
    config: IdentityConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            config,
        }
    }

    pub fn issue(&self, seller: &CurrentSeller) -> Result<AuthToken, IdentityError> {
        let now = Utc::now();
        let expires_at = now + self.config.token_ttl;
        let claims = Claims {
            sub: seller.id.0.to_string(),
            email: seller.email.clone(),
            name: seller.name.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| IdentityError::TokenGeneration(e.to_string()))?;
        Ok(AuthToken { token, expires_at })
    }

    /// Any failure (bad signature, expiry, wrong issuer, malformed claims) is
    /// `Unauthenticated`; the reason is only logged.
    pub fn verify(&self, token: &str) -> Result<CurrentSeller, IdentityError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => debug!("Token expired"),
                ErrorKind::InvalidSignature => debug!("Token signature mismatch"),
                other => debug!(error = ?other, "Token rejected"),
            }
            IdentityError::Unauthenticated
        })?;

        let id = data.claims.sub.parse::<u32>().map_err(|_| {
            debug!(sub = %data.claims.sub, "Token subject is not a seller id");
            IdentityError::Unauthenticated
        })?;
        Ok(CurrentSeller {
            id: SellerId(id),
            email: data.claims.email,
            name: data.claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn config() -> IdentityConfig {
        IdentityConfig::new("an-hs256-secret-that-is-long-enough").unwrap()
    }

    fn seller() -> CurrentSeller {
        CurrentSeller {
            id: SellerId(3),
            email: "ana@shop.io".into(),
            name: "Ana".into(),
        }
    }

    #[test]
    fn round_trips_the_seller() {
        let service = TokenService::new(config());
        let issued = service.issue(&seller()).unwrap();
        assert_eq!(service.verify(&issued.token).unwrap(), seller());
        assert!(issued.expires_at > Utc::now() + Duration::hours(23));
    }

    #[test]
    fn expired_token_is_unauthenticated() {
        let mut config = config();
        config.token_ttl = Duration::hours(-2);
        let service = TokenService::new(config);
        let issued = service.issue(&seller()).unwrap();
        assert_eq!(
            service.verify(&issued.token),
            Err(IdentityError::Unauthenticated)
        );
    }

    #[test]
    fn token_from_another_secret_is_unauthenticated() {
        let issued = TokenService::new(config()).issue(&seller()).unwrap();
        let other = TokenService::new(
            IdentityConfig::new("a-completely-different-secret-value!!").unwrap(),
        );
        assert_eq!(other.verify(&issued.token), Err(IdentityError::Unauthenticated));
    }

    #[test]
    fn wrong_issuer_is_unauthenticated() {
        let issued = TokenService::new(config()).issue(&seller()).unwrap();
        let mut config = config();
        config.issuer = "someone-else".into();
        assert_eq!(
            TokenService::new(config).verify(&issued.token),
            Err(IdentityError::Unauthenticated)
        );
    }
}
