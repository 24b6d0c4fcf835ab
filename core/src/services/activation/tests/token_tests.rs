//! Unit tests for the activation token issuer

use crate::domain::entities::account::Account;
use crate::errors::VerificationError;
use crate::services::activation::{ActivationTokenConfig, ActivationTokenService};

fn account() -> Account {
    Account::new(
        "TestUser".to_string(),
        "test@test.test".to_string(),
        "+201005263988".to_string(),
        "hashed_secret".to_string(),
    )
}

fn token_service() -> ActivationTokenService {
    ActivationTokenService::new(ActivationTokenConfig {
        secret: "unit-test-secret".to_string(),
        ..Default::default()
    })
}

#[test]
fn test_token_round_trip() {
    let service = token_service();
    let account = account();

    let token = service.make_token(&account).unwrap();
    let claims = service.verify_token(&token).unwrap();

    assert_eq!(claims.sub, account.id.to_string());
    assert!(service.matches_freshness(&claims, &account));
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_garbage_token_is_rejected() {
    let service = token_service();

    let err = service.verify_token("abc").unwrap_err();
    assert!(matches!(err, VerificationError::InvalidOrExpiredToken));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let account = account();
    let other = ActivationTokenService::new(ActivationTokenConfig {
        secret: "some-other-secret".to_string(),
        ..Default::default()
    });
    let token = other.make_token(&account).unwrap();

    let err = token_service().verify_token(&token).unwrap_err();
    assert!(matches!(err, VerificationError::InvalidOrExpiredToken));
}

#[test]
fn test_expired_token_is_rejected() {
    let service = ActivationTokenService::new(ActivationTokenConfig {
        secret: "unit-test-secret".to_string(),
        validity_hours: -1,
        ..Default::default()
    });
    let token = service.make_token(&account()).unwrap();

    let err = service.verify_token(&token).unwrap_err();
    assert!(matches!(err, VerificationError::InvalidOrExpiredToken));
}

#[test]
fn test_password_change_breaks_freshness() {
    let service = token_service();
    let mut account = account();

    let token = service.make_token(&account).unwrap();
    let claims = service.verify_token(&token).unwrap();

    account.set_password_hash("hashed_other".to_string());
    assert!(!service.matches_freshness(&claims, &account));
}

#[test]
fn test_activation_link_shape() {
    let service = token_service();
    let link = service.activation_link("tok123");
    assert_eq!(link, "https://anteroom.app/accounts/verify-email/tok123");
}
