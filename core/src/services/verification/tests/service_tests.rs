//! Unit tests for the phone verification service

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, VerificationError};
use crate::repositories::{AccountRepository, MockAccountRepository};
use crate::services::verification::{
    MockPhoneVerifier, PhoneVerificationConfig, PhoneVerificationService,
};

fn account_with_phone(phone: &str) -> Account {
    Account::new(
        "TestUser".to_string(),
        "test@test.test".to_string(),
        phone.to_string(),
        "hashed_secret".to_string(),
    )
}

async fn service_for(
    account: &Account,
) -> (
    PhoneVerificationService<MockPhoneVerifier, MockAccountRepository>,
    Arc<MockPhoneVerifier>,
    Arc<MockAccountRepository>,
) {
    let provider = Arc::new(MockPhoneVerifier::new());
    let repository = Arc::new(MockAccountRepository::with_account(account.clone()).await);
    let service = PhoneVerificationService::new(
        provider.clone(),
        repository.clone(),
        PhoneVerificationConfig::default(),
    );
    (service, provider, repository)
}

#[tokio::test]
async fn test_confirm_with_issued_code_sets_verified_at() {
    let account = account_with_phone("12312123");
    let (service, _provider, repository) = service_for(&account).await;

    service.request_code(&account).await.unwrap();
    service.confirm(&account, "777777").await.unwrap();

    let stored = repository.find_by_id(account.id).await.unwrap().unwrap();
    assert!(stored.phone_verified_at.is_some());
}

#[tokio::test]
async fn test_second_confirm_is_already_verified() {
    let account = account_with_phone("12312123");
    let (service, _provider, repository) = service_for(&account).await;

    service.request_code(&account).await.unwrap();
    service.confirm(&account, "777777").await.unwrap();

    // Re-read the settled account and confirm again with the same code.
    let stored = repository.find_by_id(account.id).await.unwrap().unwrap();
    let err = service.confirm(&stored, "777777").await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Verification(VerificationError::AlreadyVerified)
    ));
}

#[tokio::test]
async fn test_wrong_code_is_rejected_and_leaves_account_unverified() {
    let account = account_with_phone("12312123");
    let (service, _provider, repository) = service_for(&account).await;

    service.request_code(&account).await.unwrap();
    let err = service.confirm(&account, "000000").await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Verification(VerificationError::InvalidCode)
    ));
    let stored = repository.find_by_id(account.id).await.unwrap().unwrap();
    assert!(stored.phone_verified_at.is_none());
}

#[tokio::test]
async fn test_malformed_code_fails_without_burning_the_issued_code() {
    let account = account_with_phone("12312123");
    let (service, provider, _repository) = service_for(&account).await;

    service.request_code(&account).await.unwrap();
    let err = service.confirm(&account, "77").await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Verification(VerificationError::InvalidCode)
    ));
    // The provider was never consulted; the issued code is still live.
    assert_eq!(provider.issued_code("12312123").await.as_deref(), Some("777777"));
}

#[tokio::test]
async fn test_already_verified_guard_runs_before_provider_check() {
    let mut account = account_with_phone("12312123");
    account.verify_phone();
    let (service, provider, _repository) = service_for(&account).await;

    service.request_code(&account).await.unwrap();
    let err = service.confirm(&account, "777777").await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Verification(VerificationError::AlreadyVerified)
    ));
    // The valid code was not consumed by the rejected confirmation.
    assert_eq!(provider.issued_code("12312123").await.as_deref(), Some("777777"));
}

#[tokio::test]
async fn test_new_request_invalidates_previous_code() {
    let account = account_with_phone("12312123");
    let (service, provider, _repository) = service_for(&account).await;

    service.request_code(&account).await.unwrap();
    provider.set_next_code("123456").await;
    service.request_code(&account).await.unwrap();

    // Only the newest code is live.
    let err = service.confirm(&account, "777777").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Verification(VerificationError::InvalidCode)
    ));
    service.confirm(&account, "123456").await.unwrap();
}

#[tokio::test]
async fn test_request_code_retries_a_transient_outage() {
    let account = account_with_phone("12312123");
    let (service, provider, _repository) = service_for(&account).await;

    provider.fail_next_calls(1);
    service.request_code(&account).await.unwrap();

    assert!(provider.issued_code("12312123").await.is_some());
}

#[tokio::test]
async fn test_request_code_gives_up_after_one_retry() {
    let account = account_with_phone("12312123");
    let (service, provider, _repository) = service_for(&account).await;

    provider.fail_next_calls(2);
    let err = service.request_code(&account).await.unwrap_err();

    assert!(matches!(err, DomainError::Provider(_)));
}

#[tokio::test]
async fn test_concurrent_confirms_yield_one_winner() {
    let account = account_with_phone("12312123");
    let provider = Arc::new(MockPhoneVerifier::new());
    let repository = Arc::new(MockAccountRepository::with_account(account.clone()).await);
    let service = Arc::new(PhoneVerificationService::new(
        provider,
        repository.clone(),
        PhoneVerificationConfig::default(),
    ));

    service.request_code(&account).await.unwrap();

    // Both tasks pass the stale-snapshot guard; the conditional write
    // decides the winner. The loser of the provider check sees
    // InvalidCode (code consumed), the loser of the write sees
    // AlreadyVerified.
    let first = {
        let service = service.clone();
        let account = account.clone();
        tokio::spawn(async move { service.confirm(&account, "777777").await })
    };
    let second = {
        let service = service.clone();
        let account = account.clone();
        tokio::spawn(async move { service.confirm(&account, "777777").await })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);

    let stored = repository.find_by_id(account.id).await.unwrap().unwrap();
    assert!(stored.is_phone_verified());
}
