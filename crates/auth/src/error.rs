use thiserror::Error;

use crate::claims::VerificationError;
use crate::store::StoreError;

/// Failure taxonomy for the identity/authorization core.
///
/// Every failure is surfaced immediately as a typed error; this layer never
/// retries or suppresses on the caller's behalf. Mapping to user-facing
/// responses (status codes, wording) is the boundary layer's concern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No credential was presented, or it could not be verified.
    #[error("authentication required")]
    AuthenticationRequired,

    /// Credential rejected by the identity provider.
    #[error("invalid credential")]
    InvalidCredential,

    /// Credential reported as expired by the identity provider.
    #[error("expired credential")]
    ExpiredCredential,

    /// Principal store unreachable during lookup or provisioning.
    #[error("principal resolution failed: {0}")]
    ResolutionFailed(String),

    /// Principal's role rank is below the operation's floor.
    #[error("insufficient role: have {have}, need at least {need}")]
    InsufficientRole {
        have: crate::Role,
        need: crate::Role,
    },

    /// Principal is outside the target's brand/ownership scope.
    #[error("insufficient scope")]
    InsufficientScope,
}

impl From<VerificationError> for AuthError {
    fn from(err: VerificationError) -> Self {
        match err {
            VerificationError::Invalid => AuthError::InvalidCredential,
            VerificationError::Expired => AuthError::ExpiredCredential,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::ResolutionFailed(err.to_string())
    }
}

impl AuthError {
    /// Both verification failures read as "unauthenticated" to callers that
    /// do not need to distinguish for client messaging.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::AuthenticationRequired
                | AuthError::InvalidCredential
                | AuthError::ExpiredCredential
        )
    }
}
