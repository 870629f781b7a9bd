//! [`ActorEntity`] implementation for [`Client`].

use super::ClientError;
use crate::model::{normalize_email, Client, ClientChanges, ClientCreate, ClientId, ClientUpdate};
use crate::ownership::authorize;
use async_trait::async_trait;
use chrono::Utc;
use tracker_actors::ActorEntity;

fn required(field: &str, value: &str) -> Result<String, ClientError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClientError::ValidationError(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

fn email(value: &str) -> Result<String, ClientError> {
    let value = required("email", value)?;
    if !value.contains('@') {
        return Err(ClientError::ValidationError(format!(
            "invalid email address: {value}"
        )));
    }
    Ok(value)
}

/// Empty optional fields are stored as `None`.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl ActorEntity for Client {
    type Id = ClientId;
    type Create = ClientCreate;
    type Update = ClientUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ClientError;

    fn from_create_params(id: ClientId, params: ClientCreate) -> Result<Self, ClientError> {
        let details = params.details;
        Ok(Self {
            id,
            name: required("name", &details.name)?,
            surname: required("surname", &details.surname)?,
            company: optional(details.company),
            email: email(&details.email)?,
            phone: optional(details.phone),
            seller_id: params.seller_id,
            created_at: Utc::now(),
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(normalize_email(&self.email))
    }

    /// Applies field changes after checking that `acting` owns the client.
    /// `seller_id` is not among the editable fields.
    async fn on_update(&mut self, update: ClientUpdate, _ctx: &()) -> Result<(), ClientError> {
        authorize(&*self, Some(&update.acting)).into_result()?;

        let ClientChanges {
            name,
            surname,
            company,
            email: new_email,
            phone,
        } = update.changes;
        if let Some(name) = name {
            self.name = required("name", &name)?;
        }
        if let Some(surname) = surname {
            self.surname = required("surname", &surname)?;
        }
        if company.is_some() {
            self.company = optional(company);
        }
        if let Some(new_email) = new_email {
            self.email = email(&new_email)?;
        }
        if phone.is_some() {
            self.phone = optional(phone);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ClientError> {
        Ok(())
    }
}
