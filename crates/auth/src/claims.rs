use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitrine_core::SubjectId;

/// Verified identity claims (transport-agnostic).
///
/// This is the minimal set of claims the core expects once a bearer
/// credential has been verified by whatever identity provider is in use.
/// Produced once per request and discarded afterwards; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalClaims {
    /// Stable subject identifier issued by the provider.
    pub subject_id: SubjectId,

    /// Email address, if the provider shares it.
    pub email: Option<String>,

    /// Display name, if the provider shares it.
    pub display_name: Option<String>,

    /// Avatar URL, if the provider shares it.
    pub avatar_url: Option<String>,
}

impl ExternalClaims {
    /// Claims carrying only a subject id.
    pub fn bare(subject_id: impl Into<SubjectId>) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: None,
            display_name: None,
            avatar_url: None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// Credential is missing, malformed, or rejected by the provider.
    #[error("invalid credential")]
    Invalid,

    /// Provider reports the credential as expired.
    #[error("expired credential")]
    Expired,
}

/// Verification contract for externally-issued bearer credentials.
///
/// Signature checks, key fetching and caching are intentionally outside this
/// crate; implementations wrap the identity provider's SDK or a test double.
/// A verification failure is final for the request: no retries at this layer,
/// no side effects.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credential: &str) -> Result<ExternalClaims, VerificationError>;
}

impl<V> CredentialVerifier for std::sync::Arc<V>
where
    V: CredentialVerifier + ?Sized,
{
    fn verify(&self, credential: &str) -> Result<ExternalClaims, VerificationError> {
        (**self).verify(credential)
    }
}
