//! Credential validation module
//!
//! Pure validation rules applied before any state mutation: required
//! fields, password confirmation, identifier uniqueness and no-op change
//! detection. Uniqueness checks read the latest committed state but remain
//! a fast path; the storage unique indexes stay the final authority.

mod service;

#[cfg(test)]
mod tests;

pub use service::CredentialValidator;
