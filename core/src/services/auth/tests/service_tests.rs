//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::credentials::{LoginCredentials, SessionLifetime};
use crate::errors::{AuthError, DomainError};
use crate::repositories::MockAccountRepository;
use crate::services::auth::{AuthService, IdentifierConfig, RepositoryAuthenticator};

use super::mocks::{plain_hash, PlainPasswordHasher};

fn test_account() -> Account {
    Account::new(
        "TestUser".to_string(),
        "test@test.test".to_string(),
        "+201005263988".to_string(),
        plain_hash("secret"),
    )
}

async fn service_with(
    account: Account,
) -> AuthService<RepositoryAuthenticator<MockAccountRepository, PlainPasswordHasher>> {
    let repository = Arc::new(MockAccountRepository::with_account(account).await);
    let authenticator = Arc::new(RepositoryAuthenticator::new(
        repository,
        Arc::new(PlainPasswordHasher),
        IdentifierConfig::default(),
    ));
    AuthService::new(authenticator)
}

#[tokio::test]
async fn test_login_by_phone_succeeds() {
    let account = test_account();
    let id = account.id;
    let service = service_with(account).await;

    let outcome = service
        .login(&LoginCredentials::with_phone("+201005263988", "secret"))
        .await
        .unwrap();

    assert_eq!(outcome.account.id, id);
    assert_eq!(outcome.session, SessionLifetime::Browser);
}

#[tokio::test]
async fn test_login_by_email_succeeds() {
    let account = test_account();
    let id = account.id;
    let service = service_with(account).await;

    let outcome = service
        .login(&LoginCredentials::with_username("test@test.test", "secret"))
        .await
        .unwrap();

    assert_eq!(outcome.account.id, id);
}

#[tokio::test]
async fn test_login_without_identifier_fails() {
    let service = service_with(test_account()).await;

    let credentials = LoginCredentials {
        phone: None,
        username: None,
        password: "secret".to_string(),
        remember_me: false,
    };
    let err = service.login(&credentials).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::MissingIdentifier)
    ));
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let service = service_with(test_account()).await;

    let err = service
        .login(&LoginCredentials::with_phone("+201005263988", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_with_unknown_identifier_fails_identically() {
    let service = service_with(test_account()).await;

    let err = service
        .login(&LoginCredentials::with_username("not_exist", "secret"))
        .await
        .unwrap_err();

    // Unknown identifier and wrong password are indistinguishable.
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_phone_path_does_not_fall_back_to_username() {
    let service = service_with(test_account()).await;

    // The phone is unknown, and the valid email identifier must be
    // ignored because the phone path was chosen.
    let credentials = LoginCredentials {
        phone: Some("+14155552671".to_string()),
        username: Some("test@test.test".to_string()),
        password: "secret".to_string(),
        remember_me: false,
    };
    let err = service.login(&credentials).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_inactive_account_with_remember_me_fails() {
    let mut account = test_account();
    account.deactivate();
    let service = service_with(account).await;

    let err = service
        .login(&LoginCredentials::with_phone("+201005263988", "secret").remembered())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InactiveAccount)
    ));
}

#[tokio::test]
async fn test_inactive_account_without_remember_me_gets_browser_session() {
    let mut account = test_account();
    account.deactivate();
    let service = service_with(account).await;

    // Inactivity is only checked for persistent sessions.
    let outcome = service
        .login(&LoginCredentials::with_phone("+201005263988", "secret"))
        .await
        .unwrap();

    assert_eq!(outcome.session, SessionLifetime::Browser);
    assert!(!outcome.account.is_active);
}

#[tokio::test]
async fn test_remember_me_yields_persistent_session() {
    let service = service_with(test_account()).await;

    let outcome = service
        .login(&LoginCredentials::with_phone("+201005263988", "secret").remembered())
        .await
        .unwrap();

    assert_eq!(outcome.session, SessionLifetime::Persistent);
}
