//! [`ActorEntity`] implementation for [`Seller`].

use super::SellerError;
use crate::model::{normalize_email, Seller, SellerCreate, SellerId, SellerUpdate};
use async_trait::async_trait;
use chrono::Utc;
use tracker_actors::ActorEntity;

#[async_trait]
impl ActorEntity for Seller {
    type Id = SellerId;
    type Create = SellerCreate;
    type Update = SellerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = SellerError;

    fn from_create_params(id: SellerId, params: SellerCreate) -> Result<Self, SellerError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(SellerError::ValidationError("name must not be empty".into()));
        }
        let email = params.email.trim();
        if !email.contains('@') {
            return Err(SellerError::ValidationError(format!(
                "invalid email address: {email}"
            )));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: params.password_hash,
            created_at: Utc::now(),
        })
    }

    /// One account per email, compared case-insensitively.
    fn unique_key(&self) -> Option<String> {
        Some(normalize_email(&self.email))
    }

    async fn on_update(&mut self, update: SellerUpdate, _ctx: &()) -> Result<(), SellerError> {
        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(SellerError::ValidationError("name must not be empty".into()));
            }
            self.name = name.to_string();
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), SellerError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, email: &str) -> SellerCreate {
        SellerCreate {
            name: name.into(),
            email: email.into(),
            password_hash: "$argon2id$stub".into(),
        }
    }

    #[test]
    fn trims_name_and_email() {
        let seller =
            Seller::from_create_params(SellerId(1), create(" Ana ", " Ana@Shop.io ")).unwrap();
        assert_eq!(seller.name, "Ana");
        assert_eq!(seller.email, "Ana@Shop.io");
        assert_eq!(seller.unique_key().as_deref(), Some("ana@shop.io"));
    }

    #[test]
    fn rejects_blank_name_and_bad_email() {
        assert!(matches!(
            Seller::from_create_params(SellerId(1), create("  ", "a@b.c")),
            Err(SellerError::ValidationError(_))
        ));
        assert!(matches!(
            Seller::from_create_params(SellerId(1), create("Ana", "nope")),
            Err(SellerError::ValidationError(_))
        ));
    }
}
