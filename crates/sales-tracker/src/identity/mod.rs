//! # Identity
//!
//! Registration, sign-in and session resolution for sellers. Passwords are hashed
//! with Argon2 before they reach the seller actor; sessions are HS256 tokens signed
//! with the secret from [`IdentityConfig`].
//!
//! ```rust,no_run
//! # use sales_tracker::{config::IdentityConfig, identity::IdentityService, seller_actor};
//! # async fn demo() -> Result<(), sales_tracker::identity::IdentityError> {
//! let (actor, sellers) = seller_actor::new(16);
//! tokio::spawn(actor.run(()));
//!
//! let config = IdentityConfig::new("0123456789abcdef0123456789abcdef").unwrap();
//! let identity = IdentityService::new(config, sellers);
//!
//! identity.register("Ana", "ana@shop.io", "hunter22").await?;
//! let session = identity.authenticate("ana@shop.io", "hunter22").await?;
//! let current = identity.current_seller(Some(&session.token)).await?;
//! assert_eq!(current.map(|s| s.name), Some("Ana".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod password;
pub mod token;

pub use token::{AuthToken, Claims, TokenService};

use crate::clients::SellerClient;
use crate::config::IdentityConfig;
use crate::model::{CurrentSeller, EntityKind, SellerCreate, SellerProfile};
use crate::seller_actor::SellerError;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    /// Unknown email or wrong password. The two are not distinguished.
    #[error("Invalid email or password")]
    InvalidCredential,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("{entity} with this {field} already exists")]
    AlreadyExists {
        entity: EntityKind,
        field: &'static str,
    },

    #[error("Invalid registration data: {0}")]
    ValidationError(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error(transparent)]
    Seller(SellerError),
}

impl From<SellerError> for IdentityError {
    fn from(e: SellerError) -> Self {
        match e {
            SellerError::AlreadyExists { entity, field } => {
                IdentityError::AlreadyExists { entity, field }
            }
            SellerError::ValidationError(msg) => IdentityError::ValidationError(msg),
            SellerError::Unauthenticated => IdentityError::Unauthenticated,
            other => IdentityError::Seller(other),
        }
    }
}

#[derive(Clone)]
pub struct IdentityService {
    sellers: SellerClient,
    tokens: TokenService,
}

impl IdentityService {
    pub fn new(config: IdentityConfig, sellers: SellerClient) -> Self {
        Self {
            sellers,
            tokens: TokenService::new(config),
        }
    }

    /// Creates a seller account. A taken email fails with
    /// `AlreadyExists { entity: seller, field: "email" }` and leaves the existing
    /// account untouched.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SellerProfile, IdentityError> {
        if password.is_empty() {
            return Err(IdentityError::ValidationError(
                "password must not be empty".into(),
            ));
        }
        let password_hash = password::hash_password(password)?;
        let id = self
            .sellers
            .create_seller(SellerCreate {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;
        info!(seller_id = %id, "Seller registered");
        Ok(self.sellers.profile(id).await?)
    }

    /// Checks the password and issues a session token.
    #[instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthToken, IdentityError> {
        let Some(seller) = self.sellers.find_by_email(email).await? else {
            warn!("Sign-in for unknown email");
            return Err(IdentityError::InvalidCredential);
        };
        if !password::verify_password(password, &seller.password_hash) {
            warn!(seller_id = %seller.id, "Sign-in with wrong password");
            return Err(IdentityError::InvalidCredential);
        }

        let token = self.tokens.issue(&CurrentSeller {
            id: seller.id,
            email: seller.email,
            name: seller.name,
        })?;
        info!(seller_id = %seller.id, expires_at = %token.expires_at, "Token issued");
        Ok(token)
    }

    /// Resolves a session token into the acting seller.
    ///
    /// No token is `Ok(None)`. A token that is expired, tampered with, or names a
    /// seller that no longer exists is `Unauthenticated`.
    #[instrument(skip_all)]
    pub async fn current_seller(
        &self,
        token: Option<&str>,
    ) -> Result<Option<CurrentSeller>, IdentityError> {
        let Some(token) = token else {
            return Ok(None);
        };
        let seller = self.tokens.verify(token)?;
        match self.sellers.profile(seller.id).await {
            Ok(_) => Ok(Some(seller)),
            Err(SellerError::NotFound { .. }) => {
                warn!(seller_id = %seller.id, "Token for a removed seller");
                Err(IdentityError::Unauthenticated)
            }
            Err(e) => Err(e.into()),
        }
    }
}
