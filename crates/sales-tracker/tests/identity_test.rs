use chrono::Duration;
use sales_tracker::config::{IdentityConfig, TrackerConfig};
use sales_tracker::identity::{IdentityError, IdentityService};
use sales_tracker::model::{EntityKind, SellerUpdate};
use sales_tracker::seller_actor::{self, SellerError};
use tracker_actors::ActorClient;

const SECRET: &str = "identity-test-secret-0123456789abcdef";

fn service(config: IdentityConfig) -> (IdentityService, sales_tracker::clients::SellerClient) {
    let (actor, sellers) = seller_actor::new(16);
    tokio::spawn(actor.run(()));
    (IdentityService::new(config, sellers.clone()), sellers)
}

#[tokio::test]
async fn test_duplicate_email_is_refused_and_original_kept() {
    let (identity, sellers) = service(IdentityConfig::new(SECRET).unwrap());
    let first = identity.register("Ana", "ana@shop.io", "first-pass").await.unwrap();

    let duplicate = identity.register("Impostor", "ANA@shop.io", "second-pass").await;
    assert_eq!(
        duplicate,
        Err(IdentityError::AlreadyExists {
            entity: EntityKind::Seller,
            field: "email",
        })
    );

    assert_eq!(sellers.list().await.unwrap().len(), 1);
    assert_eq!(sellers.profile(first.id).await.unwrap().name, "Ana");
    assert!(identity.authenticate("ana@shop.io", "first-pass").await.is_ok());
    assert_eq!(
        identity.authenticate("ana@shop.io", "second-pass").await,
        Err(IdentityError::InvalidCredential)
    );
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let (identity, _) = service(IdentityConfig::new(SECRET).unwrap());
    identity.register("Ana", "ana@shop.io", "right").await.unwrap();

    assert_eq!(
        identity.authenticate("ana@shop.io", "wrong").await,
        Err(IdentityError::InvalidCredential)
    );
    assert_eq!(
        identity.authenticate("nobody@shop.io", "right").await,
        Err(IdentityError::InvalidCredential)
    );
}

#[tokio::test]
async fn test_registration_validates_input() {
    let (identity, _) = service(IdentityConfig::new(SECRET).unwrap());

    assert!(matches!(
        identity.register("Ana", "ana@shop.io", "").await,
        Err(IdentityError::ValidationError(_))
    ));
    assert!(matches!(
        identity.register("Ana", "not-an-email", "secret").await,
        Err(IdentityError::ValidationError(_))
    ));
    assert!(matches!(
        identity.register("  ", "ana@shop.io", "secret").await,
        Err(IdentityError::ValidationError(_))
    ));
}

#[tokio::test]
async fn test_token_resolves_to_current_seller() {
    let (identity, sellers) = service(IdentityConfig::new(SECRET).unwrap());
    let profile = identity.register("Ana", "Ana@Shop.io", "pw").await.unwrap();
    let session = identity.authenticate("ana@shop.io", "pw").await.unwrap();

    let current = identity
        .current_seller(Some(&session.token))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.id, profile.id);
    assert_eq!(current.name, "Ana");
    assert_eq!(identity.current_seller(None).await, Ok(None));

    let renamed = sellers
        .update_profile(
            Some(&current),
            SellerUpdate {
                name: Some("Ana Maria".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Ana Maria");
    assert_eq!(
        sellers
            .update_profile(None, SellerUpdate::default())
            .await,
        Err(SellerError::Unauthenticated)
    );
}

#[tokio::test]
async fn test_expired_or_tampered_tokens_are_unauthenticated() {
    let mut config = IdentityConfig::new(SECRET).unwrap();
    config.token_ttl = Duration::hours(-1);
    let (expiring, _) = service(config);
    expiring.register("Ana", "ana@shop.io", "pw").await.unwrap();
    let stale = expiring.authenticate("ana@shop.io", "pw").await.unwrap();
    assert_eq!(
        expiring.current_seller(Some(&stale.token)).await,
        Err(IdentityError::Unauthenticated)
    );

    let (identity, _) = service(IdentityConfig::new(SECRET).unwrap());
    identity.register("Bo", "bo@shop.io", "pw").await.unwrap();
    let session = identity.authenticate("bo@shop.io", "pw").await.unwrap();

    let mut tampered: Vec<char> = session.token.chars().collect();
    let at = tampered.len() - 10;
    tampered[at] = if tampered[at] == 'x' { 'y' } else { 'x' };
    let tampered: String = tampered.into_iter().collect();
    assert_eq!(
        identity.current_seller(Some(&tampered)).await,
        Err(IdentityError::Unauthenticated)
    );
    assert_eq!(
        identity.current_seller(Some("not.a.token")).await,
        Err(IdentityError::Unauthenticated)
    );
}

#[tokio::test]
async fn test_token_for_a_seller_of_another_system_is_rejected() {
    let config = TrackerConfig::with_secret(SECRET).unwrap();
    let (issuer, _) = service(config.identity.clone());
    issuer.register("Ana", "ana@shop.io", "pw").await.unwrap();
    let session = issuer.authenticate("ana@shop.io", "pw").await.unwrap();

    // Same secret, but this store has no seller with that id.
    let (other, _) = service(config.identity);
    assert_eq!(
        other.current_seller(Some(&session.token)).await,
        Err(IdentityError::Unauthenticated)
    );
}
